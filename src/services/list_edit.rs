//! Generic editing operations behind every "add another row" UI pattern.
//!
//! All lists are plain ordered vectors addressed by 0-based index; sizes
//! are human-entered (tens of items), so O(n) operations are fine. The
//! editor never lets an interactive removal empty a list: the form always
//! renders at least one input row.

use tracing::warn;

pub fn append_blank<T: Default>(items: &mut Vec<T>) {
    items.push(T::default());
}

/// Replaces the element at `index`. Out-of-bounds updates are dropped
/// silently: the UI can race a removal and send a stale index.
pub fn update_at<T>(items: &mut [T], index: usize, value: T) {
    if let Some(slot) = items.get_mut(index) {
        *slot = value;
    }
}

/// Removes the element at `index` only while more than one element
/// remains; a single-element list is left untouched.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if items.len() > 1 && index < items.len() {
        items.remove(index);
    }
}

/// Wholesale replacement with a caller-supplied ordering (drag-to-reorder).
/// The caller is trusted to send a true permutation; a length mismatch is
/// accepted but logged so lost or duplicated rows are observable.
pub fn reorder<T>(items: &mut Vec<T>, new_order: Vec<T>) {
    if new_order.len() != items.len() {
        warn!(
            target: "app::form",
            before = items.len(),
            after = new_order.len(),
            "reorder changed the element count"
        );
    }
    *items = new_order;
}

/// Factory upholding the one-editable-row invariant at construction time.
pub fn non_empty<T: Default>(mut items: Vec<T>) -> Vec<T> {
    if items.is_empty() {
        items.push(T::default());
    }
    items
}
