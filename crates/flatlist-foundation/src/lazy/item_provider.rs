//! Item provider trait for lazy layouts.

use flatlist_core::ItemKey;

/// Provides the information about items a lazy layout needs before it
/// composes any of them.
///
/// Implementations should be immutable; changing the data source means
/// handing the layout a new provider.
pub trait LazyLayoutItemProvider {
    /// The total number of items (visible or not).
    fn item_count(&self) -> usize;

    /// Returns the key for the item at the given index.
    ///
    /// Keys decide which mounted instance an item renders into. If not
    /// overridden, defaults to the index itself.
    fn get_key(&self, index: usize) -> ItemKey {
        ItemKey::Index(index)
    }

    /// Returns the index of the item with `key`, or `None`.
    fn get_index(&self, key: ItemKey) -> Option<usize> {
        (0..self.item_count()).find(|&i| self.get_key(i) == key)
    }
}
