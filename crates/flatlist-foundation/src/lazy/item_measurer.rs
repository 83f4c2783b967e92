//! Item measurement for lazy list.
//!
//! Measures the items that fill the viewport plus the beyond-bounds buffer
//! on both sides.

use std::collections::VecDeque;

use web_time::Instant;

use super::lazy_list_measure::FlatListSpec;
use super::measured_item::LazyListMeasuredItem;

/// Maximum items to measure per pass.
///
/// Guards against endless loops when items have zero size. If the limit is
/// hit the viewport is under-filled and a warning is logged.
const MAX_VISIBLE_ITEMS_SAFETY: usize = 10_000;

pub struct ItemMeasurer<'a, F> {
    measure_fn: &'a mut F,
    /// Items already measured while resolving the scroll position.
    pre_measured: VecDeque<LazyListMeasuredItem>,
    spec: &'a FlatListSpec,
    items_count: usize,
    viewport_size: f32,
    start_time: Instant,
}

impl<'a, F> ItemMeasurer<'a, F>
where
    F: FnMut(usize) -> LazyListMeasuredItem,
{
    pub fn new(
        measure_fn: &'a mut F,
        spec: &'a FlatListSpec,
        items_count: usize,
        viewport_size: f32,
        pre_measured: VecDeque<LazyListMeasuredItem>,
    ) -> Self {
        Self {
            measure_fn,
            pre_measured,
            spec,
            items_count,
            viewport_size,
            start_time: Instant::now(),
        }
    }

    /// Measures visible items and the beyond-bounds buffer.
    ///
    /// `first_item_scroll_offset` is how far the first item starts above the
    /// viewport. Returns items in index order with offsets set.
    pub fn measure_all(
        &mut self,
        first_item_index: usize,
        first_item_scroll_offset: f32,
    ) -> Vec<LazyListMeasuredItem> {
        let (mut items, next_index, next_offset) =
            self.measure_visible(first_item_index, -first_item_scroll_offset);

        self.measure_beyond_after(next_index, next_offset, &mut items);

        if first_item_index > 0 {
            if let Some(first) = items.first() {
                let mut before = self.measure_beyond_before(first_item_index, first.offset);
                if !before.is_empty() {
                    before.append(&mut items);
                    items = before;
                }
            }
        }

        items
    }

    /// Measures items from `start_index` until the viewport is filled.
    ///
    /// Returns (items, next_index, next_offset).
    fn measure_visible(
        &mut self,
        start_index: usize,
        start_offset: f32,
    ) -> (Vec<LazyListMeasuredItem>, usize, f32) {
        let mut items = Vec::new();
        let mut index = start_index;
        let mut offset = start_offset;

        while index < self.items_count
            && offset < self.viewport_size
            && items.len() < MAX_VISIBLE_ITEMS_SAFETY
        {
            if self.over_budget() {
                log::warn!(
                    "flatlist measurement exceeded its time budget at index {}; stopping early",
                    index
                );
                break;
            }
            let mut item = self.measure(index);
            item.offset = offset;
            offset += item.main_axis_size();
            items.push(item);
            index += 1;
        }

        if items.len() >= MAX_VISIBLE_ITEMS_SAFETY && offset < self.viewport_size {
            log::warn!(
                "MAX_VISIBLE_ITEMS ({}) reached with {:.0}px of viewport left",
                MAX_VISIBLE_ITEMS_SAFETY,
                self.viewport_size - offset
            );
        }

        (items, index, offset)
    }

    fn measure_beyond_after(
        &mut self,
        mut index: usize,
        mut offset: f32,
        items: &mut Vec<LazyListMeasuredItem>,
    ) {
        let count = self
            .spec
            .beyond_bounds_item_count
            .min(self.items_count.saturating_sub(index));

        for _ in 0..count {
            if self.over_budget() {
                break;
            }
            let mut item = self.measure(index);
            item.offset = offset;
            offset += item.main_axis_size();
            items.push(item);
            index += 1;
        }
    }

    /// Returns the items before `first_index`, earliest first.
    fn measure_beyond_before(
        &mut self,
        first_index: usize,
        first_offset: f32,
    ) -> Vec<LazyListMeasuredItem> {
        let count = self.spec.beyond_bounds_item_count.min(first_index);
        let mut before = Vec::with_capacity(count);
        let mut offset = first_offset;

        for i in 0..count {
            if self.over_budget() {
                break;
            }
            let mut item = self.measure(first_index - 1 - i);
            offset -= item.main_axis_size();
            item.offset = offset;
            before.push(item);
        }

        before.reverse();
        before
    }

    fn measure(&mut self, index: usize) -> LazyListMeasuredItem {
        let front_matches = self
            .pre_measured
            .front()
            .is_some_and(|item| item.index == index);
        if front_matches {
            if let Some(item) = self.pre_measured.pop_front() {
                return item;
            }
        }
        (self.measure_fn)(index)
    }

    fn over_budget(&self) -> bool {
        self.spec
            .measure_time_budget
            .is_some_and(|budget| self.start_time.elapsed() > budget)
    }
}
