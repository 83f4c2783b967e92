//! Measured item representation for lazy lists.

use flatlist_core::ItemKey;

use super::lazy_list_state::LazyListItemInfo;

/// One item measured during a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LazyListMeasuredItem {
    /// Index in the data source.
    pub index: usize,

    pub key: ItemKey,

    /// Height of the item itself.
    pub item_size: f32,

    /// Height of the separator that trails the item, zero when there is none.
    pub separator_size: f32,

    /// Offset from the viewport start, set during measurement.
    pub offset: f32,
}

impl LazyListMeasuredItem {
    pub fn new(index: usize, key: ItemKey, item_size: f32, separator_size: f32) -> Self {
        Self {
            index,
            key,
            item_size,
            separator_size,
            offset: 0.0,
        }
    }

    /// Space the item occupies in the list, trailing separator included.
    #[inline]
    pub fn main_axis_size(&self) -> f32 {
        self.item_size + self.separator_size
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.offset + self.main_axis_size()
    }

    pub fn to_item_info(&self) -> LazyListItemInfo {
        LazyListItemInfo {
            index: self.index,
            key: self.key,
            offset: self.offset,
            size: self.main_axis_size(),
        }
    }
}

/// Result of measuring a lazy list.
#[derive(Clone, Debug, Default)]
pub struct LazyListMeasureResult {
    /// Items that were measured and should be placed, in index order.
    pub visible_items: Vec<LazyListMeasuredItem>,

    pub first_visible_item_index: usize,

    /// Scroll offset within the first visible item.
    pub first_visible_item_scroll_offset: f32,

    pub viewport_size: f32,

    /// Estimated total content size (for scroll bounds).
    pub total_content_size: f32,

    pub can_scroll_forward: bool,

    pub can_scroll_backward: bool,
}
