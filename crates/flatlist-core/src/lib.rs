//! Core runtime pieces for flatlist: item keys, key errors and the
//! per-instance scope that holds remembered and memoized values.

pub mod collections;
mod error;
mod key;
mod memo;
mod owned;
mod scope;

pub use error::KeyError;
pub use key::ItemKey;
pub use memo::MemoSlot;
pub use owned::Owned;
pub use scope::InstanceScope;
