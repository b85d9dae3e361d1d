//! Primary order store
//!
//! A dense slot array addressed by the numeric tail of the order id. Lookup,
//! insert, and erase are O(1); enumeration is O(live). A parallel position
//! vector locates each alive slot inside a compact alive list so that erase
//! can swap-pop without disturbing the other entries' slots.

use types::order::Order;

/// Position-vector sentinel for a slot with no live order.
const INVALID_POSITION: u64 = u64::MAX;

/// Dense slot-addressed order store
///
/// Capacity grows monotonically: freed slots keep their backing entry and
/// may be reused when the same id is added again later.
#[derive(Debug, Clone, Default)]
pub struct SlotStore {
    /// Slot → order; `None` when the slot has no live order.
    orders: Vec<Option<Order>>,
    /// Slot → position in `alive`, or `INVALID_POSITION` when dead.
    positions: Vec<u64>,
    /// Compact list of currently-alive slots, in arbitrary order.
    alive: Vec<u64>,
}

impl SlotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with pre-reserved room for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            alive: Vec::with_capacity(capacity),
        }
    }

    /// Check whether a slot holds a live order
    pub fn contains(&self, slot: u64) -> bool {
        self.positions
            .get(slot as usize)
            .is_some_and(|&position| position != INVALID_POSITION)
    }

    /// Get the live order at a slot
    pub fn get(&self, slot: u64) -> Option<&Order> {
        self.orders.get(slot as usize).and_then(|entry| entry.as_ref())
    }

    /// Insert an order at a slot
    ///
    /// The slot must not hold a live order; callers gate on [`contains`].
    /// Inserting past the current end extends the backing vectors.
    ///
    /// [`contains`]: SlotStore::contains
    pub fn insert(&mut self, slot: u64, order: Order) {
        debug_assert!(!self.contains(slot), "slot {slot} already alive");

        let index = slot as usize;
        if index >= self.orders.len() {
            self.orders.resize_with(index + 1, || None);
            self.positions.resize(index + 1, INVALID_POSITION);
        }

        self.positions[index] = self.alive.len() as u64;
        self.alive.push(slot);
        self.orders[index] = Some(order);
    }

    /// Remove and return the live order at a slot
    ///
    /// The slot's entry in the alive list is swap-popped: the last alive
    /// slot takes its position and has its own position fixed up.
    pub fn remove(&mut self, slot: u64) -> Option<Order> {
        if !self.contains(slot) {
            return None;
        }

        let index = slot as usize;
        let position = self.positions[index] as usize;
        let last = *self.alive.last()?;

        self.alive[position] = last;
        self.positions[last as usize] = position as u64;
        self.alive.pop();
        self.positions[index] = INVALID_POSITION;

        self.orders[index].take()
    }

    /// Number of live orders
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Iterate over all live orders
    ///
    /// Iteration follows the alive list: the order is arbitrary but
    /// deterministic for identical operation histories.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.alive
            .iter()
            .filter_map(|&slot| self.orders[slot as usize].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{OrderId, SecurityId};
    use types::numeric::Quantity;
    use types::order::Side;

    fn order_at(slot: u64) -> Order {
        Order::new(
            OrderId::from_slot(slot),
            SecurityId::new("SecId1"),
            Side::Buy,
            Quantity::new(100),
            "user1",
            "CompanyA",
        )
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = SlotStore::new();
        store.insert(3, order_at(3));

        assert!(store.contains(3));
        assert_eq!(store.get(3).unwrap().order_id.as_str(), "OrdId3");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_absent() {
        let store = SlotStore::new();
        assert!(!store.contains(0));
        assert!(store.get(0).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_remove() {
        let mut store = SlotStore::new();
        store.insert(5, order_at(5));

        let removed = store.remove(5).unwrap();
        assert_eq!(removed.order_id.as_str(), "OrdId5");
        assert!(!store.contains(5));
        assert!(store.is_empty());

        // Second remove is a no-op
        assert!(store.remove(5).is_none());
    }

    #[test]
    fn test_store_swap_pop_keeps_survivors_reachable() {
        let mut store = SlotStore::new();
        for slot in [0, 1, 2, 3] {
            store.insert(slot, order_at(slot));
        }

        // Remove an interior slot; the last alive entry takes its position
        store.remove(1);

        assert_eq!(store.len(), 3);
        let mut slots: Vec<u64> = store
            .iter()
            .map(|o| o.order_id.slot().unwrap())
            .collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 2, 3]);

        // The moved entry can still be removed through its fixed-up position
        store.remove(3);
        let mut slots: Vec<u64> = store
            .iter()
            .map(|o| o.order_id.slot().unwrap())
            .collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 2]);
    }

    #[test]
    fn test_store_remove_last_alive_entry() {
        let mut store = SlotStore::new();
        store.insert(0, order_at(0));
        store.insert(1, order_at(1));

        // Removing the slot that sits last in the alive list exercises the
        // self-swap path
        store.remove(1);
        assert!(store.contains(0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_grows_to_large_slot() {
        let mut store = SlotStore::new();
        store.insert(1000, order_at(1000));

        assert!(store.contains(1000));
        assert!(!store.contains(999));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_slot_reuse_after_remove() {
        let mut store = SlotStore::new();
        store.insert(2, order_at(2));
        store.remove(2);

        store.insert(2, order_at(2));
        assert!(store.contains(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_with_capacity_starts_empty() {
        let store = SlotStore::with_capacity(1 << 10);
        assert!(store.is_empty());
        assert!(!store.contains(0));
    }
}
