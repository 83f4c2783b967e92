//! Viewport size validation.

use super::lazy_list_measure::DEFAULT_ITEM_SIZE_ESTIMATE;

/// Maximum reasonable viewport size before treating it as unbounded.
const MAX_REASONABLE_VIEWPORT: f32 = 100_000.0;

/// Number of items an unbounded viewport is sized for.
const INFINITE_VIEWPORT_ITEM_COUNT: f32 = 20.0;

/// Turns the requested viewport size into the size measurement works with.
///
/// An unbounded viewport would materialize every item, so it is replaced by
/// room for a fixed number of average-sized items.
#[derive(Clone, Copy, Debug)]
pub struct ViewportHandler {
    effective_size: f32,
}

impl ViewportHandler {
    pub fn new(viewport_size: f32, average_item_size: f32) -> Self {
        let is_infinite = viewport_size.is_infinite() || viewport_size > MAX_REASONABLE_VIEWPORT;

        let effective_size = if is_infinite {
            let estimated = average_item_size.max(DEFAULT_ITEM_SIZE_ESTIMATE)
                * INFINITE_VIEWPORT_ITEM_COUNT;
            log::warn!(
                "flatlist: unbounded viewport ({}), using fallback size {}",
                viewport_size,
                estimated
            );
            estimated
        } else {
            viewport_size
        };

        Self { effective_size }
    }

    #[inline]
    pub fn effective_size(&self) -> f32 {
        self.effective_size
    }
}
