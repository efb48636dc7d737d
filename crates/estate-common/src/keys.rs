//! Key-based record selection.

use std::collections::HashSet;
use std::hash::Hash;

/// Marks the first record of every key as kept and every later repeat as not.
///
/// Missing keys compare equal to each other, so a second `None` is a repeat.
///
/// # Examples
///
/// ```
/// use estate_common::keys::first_occurrence_mask;
///
/// let keys = [Some("A"), Some("A"), Some("B"), None, None];
/// assert_eq!(first_occurrence_mask(&keys), vec![true, false, true, true, false]);
/// ```
pub fn first_occurrence_mask<K: Hash + Eq>(keys: &[K]) -> Vec<bool> {
    let mut seen = HashSet::with_capacity(keys.len());
    keys.iter().map(|key| seen.insert(key)).collect()
}

/// Number of records that repeat a key seen earlier.
pub fn count_repeats<K: Hash + Eq>(keys: &[K]) -> usize {
    first_occurrence_mask(keys)
        .into_iter()
        .filter(|keep| !keep)
        .count()
}
