//! The list presenter.
//!
//! [`FlatList`] owns one mounted instance per item key. Each frame it
//! measures the items around the scroll position, renders the ones whose
//! record changed since their last render, reuses the output of the rest and
//! disposes every instance that left the window.

use std::rc::Rc;

use flatlist_core::collections::map::{Entry, HashMap};
use flatlist_core::{InstanceScope, ItemKey};
use flatlist_ui::{HeadlessRenderer, RecordedRenderScene, RenderNode};

use super::item_provider::LazyLayoutItemProvider;
use super::key_validation::{duplicate_key_count, validate_keys};
use super::lazy_list_measure::{measure_lazy_list, FlatListSpec};
use super::lazy_list_state::{LazyLayoutStats, LazyListState};
use super::list_config::FlatListConfig;
use super::measured_item::LazyListMeasuredItem;

/// A mounted item: its remembered state and its last output.
struct MountedItem<T> {
    scope: InstanceScope,
    index: usize,
    item: Option<T>,
    node: Option<RenderNode>,
    /// Trailing separator and the key of the item it leads to.
    separator: Option<(ItemKey, RenderNode)>,
    /// Last frame that materialized the item.
    measured_frame: u64,
    /// Last frame that placed the item.
    placed_frame: u64,
}

impl<T> MountedItem<T> {
    fn new(index: usize) -> Self {
        Self {
            scope: InstanceScope::new(),
            index,
            item: None,
            node: None,
            separator: None,
            measured_frame: 0,
            placed_frame: 0,
        }
    }
}

/// Output of a row whose instance a later row with the same key took over
/// during the same frame.
struct DisplacedOutput {
    node: RenderNode,
    separator: Option<RenderNode>,
}

/// One placed entry of a frame, in list order.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEntry {
    Item {
        index: usize,
        key: ItemKey,
        offset: f32,
        node: RenderNode,
    },
    Separator {
        after_index: usize,
        offset: f32,
        node: RenderNode,
    },
}

impl ListEntry {
    pub fn offset(&self) -> f32 {
        match self {
            ListEntry::Item { offset, .. } | ListEntry::Separator { offset, .. } => *offset,
        }
    }

    pub fn node(&self) -> &RenderNode {
        match self {
            ListEntry::Item { node, .. } | ListEntry::Separator { node, .. } => node,
        }
    }
}

/// What one call to [`FlatList::frame`] placed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFrame {
    pub entries: Vec<ListEntry>,
    pub first_visible_item_index: usize,
    pub first_visible_item_scroll_offset: f32,
    pub viewport_size: f32,
    pub total_content_size: f32,
    pub can_scroll_forward: bool,
    pub can_scroll_backward: bool,
}

impl ListFrame {
    /// Placed items as `(index, key)` pairs.
    pub fn item_keys(&self) -> impl Iterator<Item = (usize, ItemKey)> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Item { index, key, .. } => Some((*index, *key)),
            ListEntry::Separator { .. } => None,
        })
    }

    /// Indices of the items each placed separator follows.
    pub fn separator_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Separator { after_index, .. } => Some(*after_index),
            ListEntry::Item { .. } => None,
        })
    }

    /// Items that intersect the viewport, as opposed to the buffer around it.
    pub fn visible_item_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                ListEntry::Item {
                    index,
                    offset,
                    node,
                    ..
                } if *offset < self.viewport_size
                    && *offset + node.main_axis_size() > 0.0 =>
                {
                    Some(*index)
                }
                _ => None,
            })
            .collect()
    }

    pub fn paint(&self, renderer: &HeadlessRenderer) -> RecordedRenderScene {
        let mut operations = Vec::new();
        for entry in &self.entries {
            renderer.render_into(entry.node(), entry.offset(), &mut operations);
        }
        RecordedRenderScene::new(operations)
    }
}

pub struct FlatList<T> {
    config: FlatListConfig<T>,
    spec: FlatListSpec,
    state: LazyListState,
    instances: HashMap<ItemKey, MountedItem<T>>,
    stats: LazyLayoutStats,
    frame_id: u64,
}

impl<T> FlatList<T>
where
    T: Clone + PartialEq + 'static,
{
    pub fn new(config: FlatListConfig<T>) -> Self {
        Self::with_spec(config, FlatListSpec::default())
    }

    pub fn with_spec(config: FlatListConfig<T>, spec: FlatListSpec) -> Self {
        check_config(&config);
        Self {
            config,
            spec,
            state: LazyListState::new(),
            instances: HashMap::default(),
            stats: LazyLayoutStats::default(),
            frame_id: 0,
        }
    }

    pub fn config(&self) -> &FlatListConfig<T> {
        &self.config
    }

    pub fn spec(&self) -> &FlatListSpec {
        &self.spec
    }

    pub fn state(&self) -> &LazyListState {
        &self.state
    }

    pub fn stats(&self) -> &LazyLayoutStats {
        &self.stats
    }

    /// Keys of the mounted items, sorted.
    pub fn mounted_keys(&self) -> Vec<ItemKey> {
        let mut keys: Vec<_> = self.instances.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn is_mounted(&self, key: ItemKey) -> bool {
        self.instances.contains_key(&key)
    }

    /// Scrolls by `delta` pixels on the next frame; positive moves toward
    /// later items.
    pub fn scroll_by(&mut self, delta: f32) {
        self.state.dispatch_scroll_delta(delta);
    }

    pub fn scroll_to_item(&mut self, index: usize, scroll_offset: f32) {
        self.state.scroll_to_item(index, scroll_offset);
    }

    /// Scrolls to the item with `key`. Returns `false` if no item has it.
    pub fn scroll_to_key(&mut self, key: ItemKey) -> bool {
        match self.config.get_index(key) {
            Some(index) => {
                self.state.scroll_to_item(index, 0.0);
                true
            }
            None => false,
        }
    }

    /// Replaces the data, keeping the callbacks.
    ///
    /// Mounted instances are matched to the new data by key on the next
    /// frame; those whose item compares equal keep their output.
    pub fn set_data(&mut self, data: impl Into<Rc<[T]>>) {
        let config = self.config.with_data(data);
        self.replace_config(config);
    }

    /// Replaces the configuration, callbacks included.
    ///
    /// Every mounted item and separator renders again on the next frame.
    /// Instance scopes are kept, so remembered and memoized values survive.
    pub fn set_config(&mut self, config: FlatListConfig<T>) {
        for mounted in self.instances.values_mut() {
            mounted.node = None;
            mounted.separator = None;
        }
        self.replace_config(config);
    }

    /// The first visible item keeps its place if its key survives.
    fn replace_config(&mut self, config: FlatListConfig<T>) {
        check_config(&config);
        if let Some(key) = self.state.last_known_first_item_key() {
            if let Some(index) = config.get_index(key) {
                self.state.relocate_first_item(index);
            }
        }
        self.config = config;
    }

    /// Lays out the list for a viewport of `viewport_size` pixels.
    pub fn frame(&mut self, viewport_size: f32) -> ListFrame {
        self.frame_id += 1;
        let frame_id = self.frame_id;
        let Self {
            config,
            spec,
            state,
            instances,
            stats,
            ..
        } = self;

        let mut displaced = HashMap::default();
        let result = measure_lazy_list(config.item_count(), state, viewport_size, spec, |index| {
            materialize(config, instances, &mut displaced, stats, frame_id, index)
        });

        let mut entries = Vec::with_capacity(result.visible_items.len() * 2);
        for measured in &result.visible_items {
            let Some(mounted) = instances.get_mut(&measured.key) else {
                continue;
            };
            mounted.placed_frame = frame_id;
            let (node, separator) = match displaced.remove(&measured.index) {
                Some(DisplacedOutput { node, separator }) => (node, separator),
                None => match &mounted.node {
                    Some(node) => (
                        node.clone(),
                        mounted.separator.as_ref().map(|(_, node)| node.clone()),
                    ),
                    None => continue,
                },
            };
            entries.push(ListEntry::Item {
                index: measured.index,
                key: measured.key,
                offset: measured.offset,
                node,
            });
            if measured.index + 1 < config.item_count() {
                if let Some(separator) = separator {
                    entries.push(ListEntry::Separator {
                        after_index: measured.index,
                        offset: measured.offset + measured.item_size,
                        node: separator,
                    });
                }
            }
        }

        let before = instances.len();
        instances.retain(|key, mounted| {
            let keep = mounted.placed_frame == frame_id;
            if !keep {
                log::debug!("dispose item {} (last at index {})", key, mounted.index);
            }
            keep
        });
        stats.total_disposed += before - instances.len();
        stats.items_in_use = instances.len();

        ListFrame {
            entries,
            first_visible_item_index: result.first_visible_item_index,
            first_visible_item_scroll_offset: result.first_visible_item_scroll_offset,
            viewport_size: result.viewport_size,
            total_content_size: result.total_content_size,
            can_scroll_forward: result.can_scroll_forward,
            can_scroll_backward: result.can_scroll_backward,
        }
    }
}

fn check_config<T>(config: &FlatListConfig<T>) {
    config.warn_if_positional();
    if let Err(err) = validate_keys(config) {
        log::warn!(
            "{err} ({} keys repeated); items sharing a key share one instance",
            duplicate_key_count(config)
        );
    }
}

/// Mounts or updates the item at `index` and reports its size.
fn materialize<T>(
    config: &FlatListConfig<T>,
    instances: &mut HashMap<ItemKey, MountedItem<T>>,
    displaced: &mut HashMap<usize, DisplacedOutput>,
    stats: &mut LazyLayoutStats,
    frame_id: u64,
    index: usize,
) -> LazyListMeasuredItem
where
    T: Clone + PartialEq,
{
    let key = config.get_key(index);
    let Some(item) = config.data.get(index) else {
        return LazyListMeasuredItem::new(index, key, 0.0, 0.0);
    };

    let mounted = match instances.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            stats.total_mounted += 1;
            log::debug!("mount item {} at index {}", key, index);
            entry.insert(MountedItem::new(index))
        }
    };
    if mounted.measured_frame == frame_id && mounted.index != index {
        log::warn!(
            "item key {} used at indices {} and {}; both render into one instance",
            key,
            mounted.index,
            index
        );
        if let Some(node) = mounted.node.clone() {
            let separator = mounted.separator.as_ref().map(|(_, node)| node.clone());
            displaced.insert(mounted.index, DisplacedOutput { node, separator });
        }
    }
    mounted.measured_frame = frame_id;
    mounted.index = index;

    let unchanged = mounted.node.is_some() && mounted.item.as_ref() == Some(item);
    if unchanged {
        stats.reuse_count += 1;
        log::trace!("reuse item {} at index {}", key, index);
    } else {
        mounted.scope.begin_pass();
        let node = (config.render_item)(item, &mut mounted.scope);
        mounted.scope.end_pass();
        stats.total_composed += 1;
        mounted.item = Some(item.clone());
        mounted.node = Some(node);
    }
    let item_size = mounted.node.as_ref().map_or(0.0, RenderNode::main_axis_size);

    let separator_size = match &config.item_separator {
        Some(render_separator) if index + 1 < config.item_count() => {
            let next_key = config.get_key(index + 1);
            let current = matches!(&mounted.separator, Some((leads_to, _)) if *leads_to == next_key);
            if !current {
                mounted.separator = Some((next_key, render_separator()));
                stats.separators_rendered += 1;
            }
            mounted
                .separator
                .as_ref()
                .map_or(0.0, |(_, node)| node.main_axis_size())
        }
        _ => {
            mounted.separator = None;
            0.0
        }
    };

    LazyListMeasuredItem::new(index, key, item_size, separator_size)
}
