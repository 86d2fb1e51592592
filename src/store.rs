//! Cart State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! single authoritative local view of the cart; all mutation goes through
//! field writes, which notify the sync effect registered in `app`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CartEntry, MenuItem};

/// Local cart state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct CartState {
    /// Cart ID, replaced by the server-assigned one on hydration
    pub cart_id: String,
    /// At most one entry per distinct `item_id` (maintained by callers
    /// through the entry helpers below, never validated here)
    pub items: Vec<CartEntry>,
    /// False until the initial load from the server has succeeded.
    /// Synchronization is suppressed while false so an empty local cart
    /// cannot clobber server state before hydration.
    pub loaded: bool,
}

impl CartState {
    pub fn new() -> Self {
        // TODO: Self-chosen cart ID for now, assign per user once auth exists
        Self {
            cart_id: "DEMO".to_string(),
            items: Vec::new(),
            loaded: false,
        }
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type CartStore = Store<CartState>;

/// Get the cart store from context
pub fn use_cart_store() -> CartStore {
    expect_context::<CartStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a menu item to the cart with count 1, or increment its existing entry
pub fn store_add_item(store: &CartStore, item: &MenuItem) {
    add_entry(&mut store.items().write(), item);
}

/// Set the count for an entry; a count of zero removes the entry
pub fn store_set_count(store: &CartStore, item_id: &str, count: u32) {
    set_entry_count(&mut store.items().write(), item_id, count);
}

/// Remove an entry from the cart by item ID
pub fn store_remove_item(store: &CartStore, item_id: &str) {
    remove_entry(&mut store.items().write(), item_id);
}

/// Total number of items in the cart across all entries
pub fn total_count(items: &[CartEntry]) -> u32 {
    items.iter().map(|entry| entry.count).sum()
}

// ========================
// Entry List Operations
// ========================
//
// Pure operations on the entry list. These carry the uniqueness invariant:
// locate an existing entry by item ID and update it in place, or append.

/// Add-or-increment: bump the entry for `item` or append one with count 1
pub fn add_entry(entries: &mut Vec<CartEntry>, item: &MenuItem) {
    match entries.iter_mut().find(|e| e.item.item_id == item.item_id) {
        Some(entry) => entry.count += 1,
        None => entries.push(CartEntry {
            item: item.clone(),
            count: 1,
        }),
    }
}

/// Overwrite an entry's count. Zero removes the entry; entries are never
/// retained at count zero.
pub fn set_entry_count(entries: &mut Vec<CartEntry>, item_id: &str, count: u32) {
    if count == 0 {
        remove_entry(entries, item_id);
        return;
    }
    if let Some(entry) = entries.iter_mut().find(|e| e.item.item_id == item_id) {
        entry.count = count;
    }
}

/// Splice an entry out of the list by item ID
pub fn remove_entry(entries: &mut Vec<CartEntry>, item_id: &str) {
    entries.retain(|e| e.item.item_id != item_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str) -> MenuItem {
        MenuItem {
            item_id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
        }
    }

    #[test]
    fn add_entry_appends_with_count_one() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count, 1);
    }

    #[test]
    fn add_entry_increments_existing() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        add_entry(&mut entries, &menu_item("a"));
        add_entry(&mut entries, &menu_item("a"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count, 3);
    }

    #[test]
    fn entries_stay_unique_by_item_id() {
        let mut entries = Vec::new();
        for id in ["a", "b", "a", "c", "b", "a"] {
            add_entry(&mut entries, &menu_item(id));
        }
        set_entry_count(&mut entries, "b", 5);

        let mut ids: Vec<&str> = entries.iter().map(|e| e.item.item_id.as_str()).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn set_count_overwrites() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        set_entry_count(&mut entries, "a", 7);
        assert_eq!(entries[0].count, 7);
    }

    #[test]
    fn set_count_zero_removes_entry() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        add_entry(&mut entries, &menu_item("b"));
        set_entry_count(&mut entries, "a", 0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item.item_id, "b");
    }

    #[test]
    fn set_count_unknown_id_is_noop() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        set_entry_count(&mut entries, "missing", 4);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count, 1);
    }

    #[test]
    fn remove_entry_splices_out() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        add_entry(&mut entries, &menu_item("b"));
        remove_entry(&mut entries, "a");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item.item_id, "b");
    }

    #[test]
    fn total_count_sums_all_entries() {
        let mut entries = Vec::new();
        add_entry(&mut entries, &menu_item("a"));
        add_entry(&mut entries, &menu_item("a"));
        add_entry(&mut entries, &menu_item("b"));
        assert_eq!(total_count(&entries), 3);
        assert_eq!(total_count(&[]), 0);
    }
}
