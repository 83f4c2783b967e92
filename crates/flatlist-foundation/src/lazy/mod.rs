//! Keyed, virtualized list presentation.
//!
//! Only the items around the scroll position are materialized; everything
//! else exists as data alone.
//!
//! # Architecture
//!
//! - [`FlatListConfig`] - data, key extractor, item and separator renderers
//! - [`LazyLayoutItemProvider`] - index to key mapping
//! - [`LazyListState`] - scroll position and pending scroll requests
//! - [`measure_lazy_list`] - picks the items to materialize for a viewport
//! - [`FlatList`] - mounts, reuses and disposes item instances per frame
//!
//! # Example
//!
//! ```rust,ignore
//! let config = FlatListConfig::new(records, render_item)
//!     .key_extractor(|record, _| u64::from(record.id))
//!     .item_separator(render_separator);
//! let mut list = FlatList::new(config);
//!
//! list.scroll_by(300.0);
//! let frame = list.frame(640.0);
//! let scene = frame.paint(&HeadlessRenderer::new(360.0));
//! ```

mod flat_list;
mod item_measurer;
mod item_provider;
mod key_validation;
mod lazy_list_measure;
mod lazy_list_state;
mod list_config;
mod measured_item;
mod viewport;

pub use flat_list::*;
pub use item_provider::*;
pub use key_validation::*;
pub use lazy_list_measure::*;
pub use lazy_list_state::*;
pub use list_config::*;
pub use measured_item::*;
