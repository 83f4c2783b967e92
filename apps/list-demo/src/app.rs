//! Wiring of the demo list.

mod expensive;
mod item;
mod records;
mod styles;

pub use expensive::{expensive_function, EXPENSIVE_ITERATIONS};
pub use item::{render_item, render_item_with, render_separator};
pub use records::{generate_records, records, Record, RECORD_COUNT};
pub use styles::{ITEM_STYLE, SEPARATOR_STYLE};

use flatlist_foundation::{FlatList, FlatListConfig, FlatListSpec};

/// Configuration for the record list, keyed by record id.
pub fn record_list_config() -> FlatListConfig<Record> {
    FlatListConfig::new(records(), render_item)
        .key_extractor(|record: &Record, _index| u64::from(record.id))
        .item_separator(render_separator)
}

pub fn build_flat_list(spec: FlatListSpec) -> FlatList<Record> {
    FlatList::with_spec(record_list_config(), spec)
}
