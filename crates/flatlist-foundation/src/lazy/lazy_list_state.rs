//! Lazy list state management.
//!
//! [`LazyListState`] holds the scroll position (first visible item and the
//! offset into it), scroll requests waiting for the next layout pass and what
//! the last pass laid out. Positive scroll deltas move toward later items.

use flatlist_core::ItemKey;

use super::lazy_list_measure::DEFAULT_ITEM_SIZE_ESTIMATE;

/// Statistics about item lifecycle in a lazy list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LazyLayoutStats {
    /// Items mounted after the last layout pass.
    pub items_in_use: usize,

    /// Times the item renderer ran.
    pub total_composed: usize,

    /// Times a mounted item kept its previous output.
    pub reuse_count: usize,

    /// Items created for a key that had no mounted instance.
    pub total_mounted: usize,

    /// Mounted items dropped because they left the window or the data.
    pub total_disposed: usize,

    /// Times the separator renderer ran.
    pub separators_rendered: usize,
}

/// Position and size of one laid out item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyListItemInfo {
    pub index: usize,
    pub key: ItemKey,
    pub offset: f32,
    pub size: f32,
}

/// What the last layout pass produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LazyListLayoutInfo {
    /// Items that intersect the viewport.
    pub visible_items_info: Vec<LazyListItemInfo>,
    pub total_items_count: usize,
    pub viewport_size: f32,
}

#[derive(Clone, Debug)]
pub struct LazyListState {
    first_visible_item_index: usize,
    first_visible_item_scroll_offset: f32,
    /// Key of the first visible item, used to keep the position when data changes.
    last_known_first_item_key: Option<ItemKey>,
    scroll_to_be_consumed: f32,
    pending_scroll_to_index: Option<(usize, f32)>,
    measured_size_total: f64,
    measured_size_count: u64,
    can_scroll_forward: bool,
    can_scroll_backward: bool,
    layout_info: LazyListLayoutInfo,
}

impl Default for LazyListState {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyListState {
    pub fn new() -> Self {
        Self::with_position(0, 0.0)
    }

    pub fn with_position(index: usize, scroll_offset: f32) -> Self {
        Self {
            first_visible_item_index: index,
            first_visible_item_scroll_offset: scroll_offset.max(0.0),
            last_known_first_item_key: None,
            scroll_to_be_consumed: 0.0,
            pending_scroll_to_index: None,
            measured_size_total: 0.0,
            measured_size_count: 0,
            can_scroll_forward: false,
            can_scroll_backward: false,
            layout_info: LazyListLayoutInfo::default(),
        }
    }

    pub fn first_visible_item_index(&self) -> usize {
        self.first_visible_item_index
    }

    pub fn first_visible_item_scroll_offset(&self) -> f32 {
        self.first_visible_item_scroll_offset
    }

    pub fn last_known_first_item_key(&self) -> Option<ItemKey> {
        self.last_known_first_item_key
    }

    /// Queues a scroll by `delta` pixels, applied on the next layout pass.
    pub fn dispatch_scroll_delta(&mut self, delta: f32) {
        if delta.is_finite() {
            self.scroll_to_be_consumed += delta;
        } else {
            log::warn!("ignoring non-finite scroll delta {}", delta);
        }
    }

    /// Requests `index` at the viewport start on the next layout pass.
    ///
    /// Drops any queued scroll delta and the remembered first item key.
    pub fn scroll_to_item(&mut self, index: usize, scroll_offset: f32) {
        self.pending_scroll_to_index = Some((index, scroll_offset.max(0.0)));
        self.scroll_to_be_consumed = 0.0;
        self.last_known_first_item_key = None;
    }

    pub(crate) fn consume_scroll_delta(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_to_be_consumed)
    }

    pub(crate) fn consume_scroll_to_index(&mut self) -> Option<(usize, f32)> {
        self.pending_scroll_to_index.take()
    }

    pub(crate) fn update_scroll_position(
        &mut self,
        index: usize,
        scroll_offset: f32,
        key: Option<ItemKey>,
    ) {
        self.first_visible_item_index = index;
        self.first_visible_item_scroll_offset = scroll_offset;
        self.last_known_first_item_key = key;
    }

    /// Moves the first visible index without touching the offset.
    ///
    /// Used when data changes and the previous first item moved to `index`.
    pub(crate) fn relocate_first_item(&mut self, index: usize) {
        self.first_visible_item_index = index;
    }

    pub(crate) fn update_layout_info(&mut self, info: LazyListLayoutInfo) {
        self.layout_info = info;
    }

    pub(crate) fn update_scroll_bounds(&mut self, forward: bool, backward: bool) {
        self.can_scroll_forward = forward;
        self.can_scroll_backward = backward;
    }

    pub(crate) fn record_item_size(&mut self, size: f32) {
        if size.is_finite() && size > 0.0 {
            self.measured_size_total += f64::from(size);
            self.measured_size_count += 1;
        }
    }

    /// Running average of every item size measured so far.
    pub fn average_item_size(&self) -> f32 {
        if self.measured_size_count == 0 {
            DEFAULT_ITEM_SIZE_ESTIMATE
        } else {
            (self.measured_size_total / self.measured_size_count as f64) as f32
        }
    }

    pub fn can_scroll_forward(&self) -> bool {
        self.can_scroll_forward
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.can_scroll_backward
    }

    pub fn layout_info(&self) -> &LazyListLayoutInfo {
        &self.layout_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_accumulate_until_consumed() {
        let mut state = LazyListState::new();
        state.dispatch_scroll_delta(10.0);
        state.dispatch_scroll_delta(5.0);
        assert_eq!(state.consume_scroll_delta(), 15.0);
        assert_eq!(state.consume_scroll_delta(), 0.0);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut state = LazyListState::new();
        state.dispatch_scroll_delta(f32::NAN);
        assert_eq!(state.consume_scroll_delta(), 0.0);
    }

    #[test]
    fn scroll_to_item_drops_pending_delta() {
        let mut state = LazyListState::new();
        state.dispatch_scroll_delta(100.0);
        state.scroll_to_item(7, -3.0);
        assert_eq!(state.consume_scroll_delta(), 0.0);
        assert_eq!(state.consume_scroll_to_index(), Some((7, 0.0)));
        assert_eq!(state.consume_scroll_to_index(), None);
    }

    #[test]
    fn average_starts_at_estimate() {
        let mut state = LazyListState::new();
        assert_eq!(state.average_item_size(), DEFAULT_ITEM_SIZE_ESTIMATE);
        state.record_item_size(60.0);
        state.record_item_size(40.0);
        state.record_item_size(0.0);
        assert_eq!(state.average_item_size(), 50.0);
    }
}
