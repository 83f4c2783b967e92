//! Single-slot memoization.

/// Caches the value computed for the most recent key.
///
/// Only one `(key, value)` pair is held. Asking for a different key drops the
/// previous pair and recomputes, so the cache never grows and never serves a
/// value computed for another key.
#[derive(Debug)]
pub struct MemoSlot<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for MemoSlot<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V> MemoSlot<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, computing it if the slot is empty
    /// or holds a different key.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == key => (cached, value),
            _ => {
                let value = compute(&key);
                (key, value)
            }
        };
        &self.entry.insert(entry).1
    }
}
