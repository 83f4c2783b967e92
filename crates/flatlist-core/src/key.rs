//! Stable identity for list items.
//!
//! A mounted list item is looked up by its [`ItemKey`]. Keys produced by a
//! key extractor follow the data (they survive reordering and filtering);
//! positional keys follow the slot and therefore remount whenever the data
//! shifts underneath them.

use std::fmt;

/// Key of a list item.
///
/// User keys and positional keys live in separate variants so a record whose
/// id happens to equal another record's position never shares its instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKey {
    /// Key returned by the configured key extractor.
    User(u64),
    /// Fallback key derived from the item's position.
    Index(usize),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::User(k) => write!(f, "{k}"),
            ItemKey::Index(i) => write!(f, "#{i}"),
        }
    }
}
