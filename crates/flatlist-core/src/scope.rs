//! Per-instance remembered state.
//!
//! Every mounted list item owns one [`InstanceScope`]. Values are stored in
//! positional slots: the n-th `remember` call of a render pass always reads
//! the n-th slot. The scope is created when the item mounts and dropped when
//! it is disposed, taking every remembered value with it.

use std::any::{type_name, Any};

use crate::{MemoSlot, Owned};

#[derive(Default)]
pub struct InstanceScope {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
    passes: usize,
}

impl InstanceScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a render pass. Slot reads restart from the first slot.
    pub fn begin_pass(&mut self) {
        self.cursor = 0;
        self.passes += 1;
    }

    /// Ends a render pass, dropping slots the pass did not reach.
    pub fn end_pass(&mut self) {
        if self.cursor < self.slots.len() {
            log::debug!(
                "dropping {} unused slots after render pass",
                self.slots.len() - self.cursor
            );
            self.slots.truncate(self.cursor);
        }
    }

    /// Returns the value stored in the next slot, initializing it on first use.
    ///
    /// A slot that holds a value of another type is replaced.
    pub fn remember<T: 'static>(&mut self, init: impl FnOnce() -> T) -> Owned<T> {
        let index = self.cursor;
        self.cursor += 1;

        if let Some(existing) = self
            .slots
            .get(index)
            .and_then(|slot| slot.downcast_ref::<Owned<T>>())
        {
            return existing.clone();
        }

        let owned = Owned::new(init());
        let boxed: Box<dyn Any> = Box::new(owned.clone());
        if index < self.slots.len() {
            log::warn!(
                "slot {} changed type to {}; replacing remembered value",
                index,
                type_name::<T>()
            );
            self.slots[index] = boxed;
        } else {
            self.slots.push(boxed);
        }
        owned
    }

    /// Returns the value computed for `key`, recomputing only when `key`
    /// differs from the key used by this slot on the previous pass.
    pub fn memo<K, V>(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V
    where
        K: PartialEq + 'static,
        V: Clone + 'static,
    {
        self.remember(MemoSlot::<K, V>::new)
            .update(|slot| slot.get_or_compute(key, compute).clone())
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of render passes this instance has run.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl std::fmt::Debug for InstanceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceScope")
            .field("slots", &self.slots.len())
            .field("cursor", &self.cursor)
            .field("passes", &self.passes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pass<R>(scope: &mut InstanceScope, body: impl FnOnce(&mut InstanceScope) -> R) -> R {
        scope.begin_pass();
        let result = body(scope);
        scope.end_pass();
        result
    }

    #[test]
    fn remember_survives_passes() {
        let mut scope = InstanceScope::new();
        let first = pass(&mut scope, |s| s.remember(|| 1));
        first.update(|value| *value = 5);
        let second = pass(&mut scope, |s| s.remember(|| 1));
        assert_eq!(second.update(|value| *value), 5);
        assert_eq!(scope.passes(), 2);
    }

    #[test]
    fn slots_are_positional() {
        let mut scope = InstanceScope::new();
        pass(&mut scope, |s| {
            s.remember(|| "a");
            s.remember(|| "b");
        });
        let (a, b) = pass(&mut scope, |s| (s.remember(|| "x").update(|v| *v), s.remember(|| "y").update(|v| *v)));
        assert_eq!((a, b), ("a", "b"));
    }

    #[test]
    fn memo_skips_unchanged_key() {
        let calls = Cell::new(0);
        let mut scope = InstanceScope::new();
        for _ in 0..3 {
            let value = pass(&mut scope, |s| {
                s.memo("Item 3".to_string(), |title| {
                    calls.set(calls.get() + 1);
                    format!("{title}: done")
                })
            });
            assert_eq!(value, "Item 3: done");
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn memo_recomputes_on_key_change() {
        let calls = Cell::new(0);
        let mut scope = InstanceScope::new();
        let mut render = |title: &str| {
            pass(&mut scope, |s| {
                s.memo(title.to_string(), |t| {
                    calls.set(calls.get() + 1);
                    t.len()
                })
            })
        };
        render("Item 1");
        render("Item 1");
        render("Item 10");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn type_change_replaces_slot() {
        let mut scope = InstanceScope::new();
        pass(&mut scope, |s| {
            s.remember(|| 1u32);
        });
        let value = pass(&mut scope, |s| s.remember(|| "text").update(|v| *v));
        assert_eq!(value, "text");
        assert_eq!(scope.slot_count(), 1);
    }

    #[test]
    fn end_pass_drops_unreached_slots() {
        let mut scope = InstanceScope::new();
        pass(&mut scope, |s| {
            s.remember(|| 1);
            s.remember(|| 2);
        });
        pass(&mut scope, |s| {
            s.remember(|| 1);
        });
        assert_eq!(scope.slot_count(), 1);
    }
}
