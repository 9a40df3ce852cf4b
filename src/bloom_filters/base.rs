use std::f64::consts::LN_2;

use crate::item::Item;

/// Membership contract shared by the filters in this crate.
pub trait Filter {
    /// Records `item`. Never fails; adding the same item again is a no-op.
    fn add<T: Item + ?Sized>(&mut self, item: &T);

    /// `false` means `item` was definitely never added; `true` means it
    /// possibly was.
    fn might_contain<T: Item + ?Sized>(&self, item: &T) -> bool;

    /// Number of addressable bits (m).
    fn size(&self) -> usize;

    /// Number of hash evaluations per operation (k).
    fn hash_count(&self) -> usize;
}

/// m = -(n ln ε / (ln 2)^2) where ε is the desired false positive probability
/// and n the number of items expected to be added.
pub fn suggest_size(max_items: usize, fpp: f64) -> usize {
    let bits = (-(max_items as f64) * fpp.ln() / LN_2.powi(2)).ceil();
    (bits as usize).max(1)
}

/// k = m/n * ln 2, kept within `1..=size`.
pub fn suggest_hash_count(size: usize, max_items: usize) -> usize {
    let k = (size as f64 / max_items.max(1) as f64 * LN_2).ceil();
    (k as usize).clamp(1, size.max(1))
}
