//! Core measurement algorithm for lazy lists.
//!
//! Decides which items to materialize for the current scroll position and
//! viewport, and writes the resulting position back into the state.

use std::collections::VecDeque;

use web_time::Duration;

use super::item_measurer::ItemMeasurer;
use super::lazy_list_state::{LazyListLayoutInfo, LazyListState};
use super::measured_item::{LazyListMeasureResult, LazyListMeasuredItem};
use super::viewport::ViewportHandler;

/// Estimated item size used before any item has been measured.
pub const DEFAULT_ITEM_SIZE_ESTIMATE: f32 = 48.0;

/// Default time budget for one measurement pass.
pub const DEFAULT_MEASURE_TIME_BUDGET: Duration = Duration::from_millis(50);

/// Presenter configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatListSpec {
    /// Items kept materialized beyond each edge of the viewport.
    pub beyond_bounds_item_count: usize,

    /// Stop measuring once a pass runs longer than this. `None` disables the
    /// check, which materializes every item a large viewport asks for.
    pub measure_time_budget: Option<Duration>,
}

impl Default for FlatListSpec {
    fn default() -> Self {
        Self {
            beyond_bounds_item_count: 2,
            measure_time_budget: Some(DEFAULT_MEASURE_TIME_BUDGET),
        }
    }
}

impl FlatListSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beyond_bounds_item_count(mut self, count: usize) -> Self {
        self.beyond_bounds_item_count = count;
        self
    }

    pub fn measure_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.measure_time_budget = budget;
        self
    }
}

/// Measures a lazy list and returns the items to place.
///
/// 1. Take a pending scroll-to-item request or the current position.
/// 2. Apply the pending scroll delta.
/// 3. Walk backward with measured sizes when the delta crosses the start of
///    the first item; skip forward when it crosses its end.
/// 4. Measure the items that fill the viewport plus the beyond-bounds buffer.
/// 5. Clamp so the list never scrolls past its first or last item.
///
/// `measure_item` materializes the item at an index and reports its size.
pub fn measure_lazy_list<F>(
    items_count: usize,
    state: &mut LazyListState,
    viewport_size: f32,
    spec: &FlatListSpec,
    mut measure_item: F,
) -> LazyListMeasureResult
where
    F: FnMut(usize) -> LazyListMeasuredItem,
{
    if items_count == 0 {
        state.consume_scroll_delta();
        state.consume_scroll_to_index();
        state.update_scroll_position(0, 0.0, None);
        state.update_layout_info(LazyListLayoutInfo {
            visible_items_info: Vec::new(),
            total_items_count: 0,
            viewport_size,
        });
        state.update_scroll_bounds(false, false);
        return LazyListMeasureResult::default();
    }

    // Collapsed viewport: keep the scroll position, lay out nothing.
    if viewport_size <= 0.0 || viewport_size.is_nan() {
        state.update_layout_info(LazyListLayoutInfo {
            visible_items_info: Vec::new(),
            total_items_count: items_count,
            viewport_size,
        });
        state.update_scroll_bounds(false, false);
        return LazyListMeasureResult::default();
    }

    let viewport = ViewportHandler::new(viewport_size, state.average_item_size());
    let viewport_size = viewport.effective_size();
    let last_index = items_count - 1;

    // 1-2. Resolve the requested position
    let (mut first_index, mut first_offset) = match state.consume_scroll_to_index() {
        Some((index, offset)) => (index.min(last_index), offset),
        None => (
            state.first_visible_item_index().min(last_index),
            state.first_visible_item_scroll_offset(),
        ),
    };
    first_offset += state.consume_scroll_delta();

    // 3. Backward: jump by estimate when far away, then walk with real sizes
    let mut pre_measured = Vec::new();
    if first_offset < 0.0 && first_index > 0 {
        let average = state.average_item_size();
        if first_offset < -viewport_size {
            let jump = (((-first_offset) - viewport_size) / average).floor() as usize;
            let jump = jump.min(first_index);
            first_index -= jump;
            first_offset += jump as f32 * average;
        }
        while first_offset < 0.0 && first_index > 0 {
            first_index -= 1;
            let item = measure_item(first_index);
            state.record_item_size(item.main_axis_size());
            first_offset += item.main_axis_size();
            pre_measured.push(item);
        }
        pre_measured.reverse();
    }
    first_offset = first_offset.max(0.0);

    // Forward: skip by estimate, keeping a viewport of slack for size variance
    let mut jumped = false;
    if first_offset > viewport_size {
        let average = state.average_item_size();
        let skip = ((first_offset - viewport_size) / average).floor() as usize;
        let skip = skip.min(last_index - first_index);
        if skip > 0 {
            first_index += skip;
            first_offset -= skip as f32 * average;
            pre_measured.clear();
            jumped = true;
        }
    }

    // After a jump the slack is estimated too: materializing it would render
    // items that are never placed.
    if jumped {
        let average = state.average_item_size();
        let skip = ((first_offset / average).floor() as usize).min(last_index - first_index);
        first_index += skip;
        first_offset -= skip as f32 * average;
    }

    // Skip the remaining fully scrolled-past items with real sizes
    let mut pre_measured = VecDeque::from(pre_measured);
    while !jumped && first_offset > 0.0 && first_index < last_index {
        let queued = pre_measured
            .front()
            .is_some_and(|front| front.index == first_index);
        let item = match queued.then(|| pre_measured.pop_front()).flatten() {
            Some(item) => item,
            None => measure_item(first_index),
        };
        let size = item.main_axis_size();
        state.record_item_size(size);
        if size > first_offset {
            pre_measured.push_front(item);
            break;
        }
        first_offset -= size;
        first_index += 1;
    }
    pre_measured.retain(|item| item.index >= first_index);

    // 4. Measure visible items and the buffer
    let mut measurer = ItemMeasurer::new(
        &mut measure_item,
        spec,
        items_count,
        viewport_size,
        pre_measured,
    );
    let mut items = measurer.measure_all(first_index, first_offset);
    for item in &items {
        state.record_item_size(item.main_axis_size());
    }

    // 5. Clamp at the end; refill the gap this opens before the first item
    if clamp_at_end(&mut items, items_count, viewport_size) {
        let mut hidden_before = items.iter().take_while(|item| item.end() <= 0.0).count();
        let (mut index, mut offset) = items
            .first()
            .map_or((0, 0.0), |first| (first.index, first.offset));
        let mut filled = Vec::new();
        while index > 0 && (offset > 0.0 || hidden_before < spec.beyond_bounds_item_count) {
            index -= 1;
            let mut item = measure_item(index);
            state.record_item_size(item.main_axis_size());
            offset -= item.main_axis_size();
            item.offset = offset;
            if item.end() <= 0.0 {
                hidden_before += 1;
            }
            filled.push(item);
        }
        if !filled.is_empty() {
            filled.reverse();
            filled.append(&mut items);
            items = filled;
        }
    }
    clamp_at_start(&mut items);

    let actual_first_visible = items.iter().find(|item| item.end() > 0.0);
    let (final_first_index, final_scroll_offset, first_key) = match actual_first_visible {
        Some(first) => (first.index, (-first.offset).max(0.0), Some(first.key)),
        None => (0, 0.0, None),
    };
    state.update_scroll_position(final_first_index, final_scroll_offset, first_key);

    let total_content_size = estimate_total_content_size(items_count, &items, state);
    let can_scroll_backward = final_first_index > 0 || final_scroll_offset > 0.0;
    let can_scroll_forward = items
        .last()
        .is_some_and(|last| last.index < last_index || last.end() > viewport_size);
    state.update_scroll_bounds(can_scroll_forward, can_scroll_backward);
    state.update_layout_info(LazyListLayoutInfo {
        visible_items_info: items
            .iter()
            .filter(|item| item.end() > 0.0 && item.offset < viewport_size)
            .map(LazyListMeasuredItem::to_item_info)
            .collect(),
        total_items_count: items_count,
        viewport_size,
    });

    LazyListMeasureResult {
        visible_items: items,
        first_visible_item_index: final_first_index,
        first_visible_item_scroll_offset: final_scroll_offset,
        viewport_size,
        total_content_size,
        can_scroll_forward,
        can_scroll_backward,
    }
}

/// Shifts items down when the last item ends above the viewport end.
///
/// Returns whether a shift happened.
fn clamp_at_end(items: &mut [LazyListMeasuredItem], items_count: usize, viewport_size: f32) -> bool {
    let Some(last) = items.last() else {
        return false;
    };
    if last.index + 1 < items_count || last.end() >= viewport_size {
        return false;
    }
    let adjustment = viewport_size - last.end();
    for item in items.iter_mut() {
        item.offset += adjustment;
    }
    true
}

/// Shifts items up when the first item starts below the viewport start.
fn clamp_at_start(items: &mut [LazyListMeasuredItem]) {
    let Some(first) = items.first() else {
        return;
    };
    if first.index == 0 && first.offset > 0.0 {
        let adjustment = first.offset;
        for item in items.iter_mut() {
            item.offset -= adjustment;
        }
    }
}

fn estimate_total_content_size(
    items_count: usize,
    measured: &[LazyListMeasuredItem],
    state: &LazyListState,
) -> f32 {
    let average = if measured.is_empty() {
        state.average_item_size()
    } else {
        measured.iter().map(LazyListMeasuredItem::main_axis_size).sum::<f32>()
            / measured.len() as f32
    };
    average * items_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatlist_core::ItemKey;

    fn item(index: usize, size: f32) -> LazyListMeasuredItem {
        LazyListMeasuredItem::new(index, ItemKey::Index(index), size, 0.0)
    }

    #[test]
    fn empty_list_measures_nothing() {
        let mut state = LazyListState::with_position(4, 10.0);
        let result = measure_lazy_list(0, &mut state, 500.0, &FlatListSpec::default(), |_| {
            panic!("should not measure any items");
        });
        assert!(result.visible_items.is_empty());
        assert_eq!(state.first_visible_item_index(), 0);
    }

    #[test]
    fn collapsed_viewport_keeps_position() {
        let mut state = LazyListState::with_position(4, 10.0);
        let result = measure_lazy_list(10, &mut state, 0.0, &FlatListSpec::default(), |_| {
            panic!("should not measure any items");
        });
        assert!(result.visible_items.is_empty());
        assert_eq!(state.first_visible_item_index(), 4);
        assert_eq!(state.first_visible_item_scroll_offset(), 10.0);
    }

    #[test]
    fn single_item_cannot_scroll() {
        let mut state = LazyListState::new();
        let result = measure_lazy_list(1, &mut state, 500.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        assert_eq!(result.visible_items.len(), 1);
        assert!(!result.can_scroll_forward);
        assert!(!result.can_scroll_backward);
    }

    #[test]
    fn forward_delta_moves_first_visible() {
        let mut state = LazyListState::new();
        state.dispatch_scroll_delta(125.0);
        let result = measure_lazy_list(20, &mut state, 200.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        assert_eq!(result.first_visible_item_index, 2);
        assert_eq!(result.first_visible_item_scroll_offset, 25.0);
        assert!(result.can_scroll_forward);
        assert!(result.can_scroll_backward);
        assert_eq!(state.last_known_first_item_key(), Some(ItemKey::Index(2)));
    }

    #[test]
    fn backward_delta_uses_measured_sizes() {
        let mut state = LazyListState::with_position(1, 0.0);
        state.dispatch_scroll_delta(-1.0);
        let result = measure_lazy_list(2, &mut state, 100.0, &FlatListSpec::default(), |i| {
            if i == 0 {
                item(i, 10.0)
            } else {
                item(i, 100.0)
            }
        });
        assert_eq!(result.first_visible_item_index, 0);
        assert!((result.first_visible_item_scroll_offset - 9.0).abs() < 0.001);
    }

    #[test]
    fn scroll_past_start_clamps_to_zero() {
        let mut state = LazyListState::with_position(2, 0.0);
        state.dispatch_scroll_delta(-1_000.0);
        let result = measure_lazy_list(20, &mut state, 200.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        assert_eq!(result.first_visible_item_index, 0);
        assert_eq!(result.first_visible_item_scroll_offset, 0.0);
        assert!(!result.can_scroll_backward);
    }

    #[test]
    fn scroll_past_end_clamps_to_last_item() {
        let mut state = LazyListState::new();
        state.dispatch_scroll_delta(10_000.0);
        let result = measure_lazy_list(20, &mut state, 200.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        // 20 * 50 = 1000 content, 200 viewport: first visible is item 16 at offset 0
        assert_eq!(result.first_visible_item_index, 16);
        assert_eq!(result.first_visible_item_scroll_offset, 0.0);
        assert!(!result.can_scroll_forward);
        let last = result.visible_items.last().map(|i| (i.index, i.end()));
        assert_eq!(last, Some((19, 200.0)));
    }

    #[test]
    fn scroll_to_item_wins_over_current_position() {
        let mut state = LazyListState::with_position(3, 0.0);
        state.scroll_to_item(9, 0.0);
        let result = measure_lazy_list(20, &mut state, 200.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        assert_eq!(result.first_visible_item_index, 9);
    }

    #[test]
    fn large_jump_does_not_measure_skipped_items() {
        let mut state = LazyListState::new();
        // Seed the running average.
        measure_lazy_list(1_000, &mut state, 200.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        state.dispatch_scroll_delta(25_000.0);
        let mut measured = Vec::new();
        let result = measure_lazy_list(1_000, &mut state, 200.0, &FlatListSpec::default(), |i| {
            measured.push(i);
            item(i, 50.0)
        });
        assert_eq!(result.first_visible_item_index, 500);
        assert!(measured.len() < 20, "measured {} items", measured.len());
    }

    #[test]
    fn large_jump_places_every_measured_item() {
        let mut state = LazyListState::new();
        measure_lazy_list(1_000, &mut state, 640.0, &FlatListSpec::default(), |i| {
            item(i, 62.0)
        });
        state.dispatch_scroll_delta(62.0 * 100.0);
        let mut measured = Vec::new();
        let result = measure_lazy_list(1_000, &mut state, 640.0, &FlatListSpec::default(), |i| {
            measured.push(i);
            item(i, 62.0)
        });
        let placed: Vec<_> = result.visible_items.iter().map(|item| item.index).collect();
        assert_eq!(result.first_visible_item_index, 100);
        assert_eq!(placed, (98..113).collect::<Vec<_>>());
        measured.sort_unstable();
        measured.dedup();
        assert_eq!(measured, placed);
    }

    #[test]
    fn layout_info_lists_only_intersecting_items() {
        let mut state = LazyListState::with_position(5, 0.0);
        measure_lazy_list(100, &mut state, 200.0, &FlatListSpec::default(), |i| {
            item(i, 50.0)
        });
        let visible: Vec<_> = state
            .layout_info()
            .visible_items_info
            .iter()
            .map(|info| info.index)
            .collect();
        assert_eq!(visible, vec![5, 6, 7, 8]);
    }
}
