//! Declarative list configuration.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use flatlist_core::{InstanceScope, ItemKey};
use flatlist_ui::RenderNode;

use super::item_provider::LazyLayoutItemProvider;

static POSITIONAL_KEYS_LOGGED: AtomicBool = AtomicBool::new(false);

pub type KeyExtractor<T> = Rc<dyn Fn(&T, usize) -> u64>;
pub type RenderItem<T> = Rc<dyn Fn(&T, &mut InstanceScope) -> RenderNode>;
pub type RenderSeparator = Rc<dyn Fn() -> RenderNode>;

/// Everything a [`FlatList`](super::FlatList) needs to present `data`.
///
/// ```rust,ignore
/// let config = FlatListConfig::new(records, |record, _scope| {
///     RenderNode::text(record.title.clone())
/// })
/// .key_extractor(|record, _index| u64::from(record.id))
/// .item_separator(|| RenderNode::view(separator_style(), []));
/// ```
pub struct FlatListConfig<T> {
    pub data: Rc<[T]>,

    /// Stable identity of an item. Without one, items are keyed by position
    /// and remount whenever the data shifts.
    pub key_extractor: Option<KeyExtractor<T>>,

    pub render_item: RenderItem<T>,

    /// Rendered between consecutive items, never before the first or after
    /// the last.
    pub item_separator: Option<RenderSeparator>,
}

impl<T> Clone for FlatListConfig<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
            key_extractor: self.key_extractor.clone(),
            render_item: Rc::clone(&self.render_item),
            item_separator: self.item_separator.clone(),
        }
    }
}

impl<T> FlatListConfig<T> {
    pub fn new<F>(data: impl Into<Rc<[T]>>, render_item: F) -> Self
    where
        F: Fn(&T, &mut InstanceScope) -> RenderNode + 'static,
    {
        Self {
            data: data.into(),
            key_extractor: None,
            render_item: Rc::new(render_item),
            item_separator: None,
        }
    }

    pub fn key_extractor<K>(mut self, key_extractor: K) -> Self
    where
        K: Fn(&T, usize) -> u64 + 'static,
    {
        self.key_extractor = Some(Rc::new(key_extractor));
        self
    }

    pub fn item_separator<S>(mut self, separator: S) -> Self
    where
        S: Fn() -> RenderNode + 'static,
    {
        self.item_separator = Some(Rc::new(separator));
        self
    }

    /// Same configuration over different data.
    pub fn with_data(&self, data: impl Into<Rc<[T]>>) -> Self {
        Self {
            data: data.into(),
            ..self.clone()
        }
    }

    pub(crate) fn warn_if_positional(&self) {
        if self.key_extractor.is_none() && !POSITIONAL_KEYS_LOGGED.swap(true, Ordering::Relaxed) {
            log::warn!(
                "flatlist configured without a key extractor; items are keyed by position \
                 and remount when the data is reordered or filtered"
            );
        }
    }
}

impl<T> LazyLayoutItemProvider for FlatListConfig<T> {
    fn item_count(&self) -> usize {
        self.data.len()
    }

    fn get_key(&self, index: usize) -> ItemKey {
        match (&self.key_extractor, self.data.get(index)) {
            (Some(extract), Some(item)) => ItemKey::User(extract(item, index)),
            _ => ItemKey::Index(index),
        }
    }
}
