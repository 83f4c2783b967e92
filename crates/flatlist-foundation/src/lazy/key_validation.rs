//! Key uniqueness checks.

use flatlist_core::collections::map::{Entry, HashMap};
use flatlist_core::KeyError;

use super::item_provider::LazyLayoutItemProvider;

/// Checks that every item of `provider` has a distinct key.
///
/// Returns the first duplicate found, in index order.
pub fn validate_keys<P>(provider: &P) -> Result<(), KeyError>
where
    P: LazyLayoutItemProvider + ?Sized,
{
    let count = provider.item_count();
    let mut seen = HashMap::default();
    seen.reserve(count);
    for index in 0..count {
        let key = provider.get_key(index);
        match seen.entry(key) {
            Entry::Occupied(first) => {
                return Err(KeyError::Duplicate {
                    key,
                    first_index: *first.get(),
                    second_index: index,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
    Ok(())
}

/// Counts the keys that appear more than once.
pub fn duplicate_key_count<P>(provider: &P) -> usize
where
    P: LazyLayoutItemProvider + ?Sized,
{
    let mut counts: HashMap<_, usize> = HashMap::default();
    for index in 0..provider.item_count() {
        *counts.entry(provider.get_key(index)).or_default() += 1;
    }
    counts.values().filter(|&&n| n > 1).count()
}
