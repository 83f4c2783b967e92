//! UI primitives for flatlist
//!
//! Colors, geometry and styles, the immutable [`RenderNode`] tree that item
//! renderers return, and a headless renderer that turns trees into paint
//! operations.

mod color;
mod geometry;
mod node;
mod renderer;
mod style;

pub use color::*;
pub use geometry::*;
pub use node::*;
pub use renderer::*;
pub use style::*;
