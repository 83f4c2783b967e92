//! Foundation elements for flatlist: the lazy list presenter.

pub mod lazy;

pub use lazy::*;
