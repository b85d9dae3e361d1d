//! Order cache core
//!
//! Main coordinator for the primary store, the secondary indices, and the
//! per-security snapshots. Every mutation runs validator → store → indices
//! → snapshot (or the exact inverse), so the four views never disagree.

use std::collections::HashMap;
use tracing::debug;

use types::errors::CacheError;
use types::ids::{OrderId, SecurityId};
use types::numeric::Quantity;
use types::order::Order;

use crate::index::SlotIndex;
use crate::matching;
use crate::snapshot::SecuritySnapshot;
use crate::store::SlotStore;
use crate::validator;

/// In-memory order cache
///
/// Single-threaded: mutations take `&mut self`, so exclusive access is
/// enforced by the borrow checker. Callers wrap the cache in a lock when
/// sharing it across threads.
#[derive(Debug, Default)]
pub struct OrderCache {
    /// Primary slot-addressed store
    store: SlotStore,
    /// user → live slots
    by_user: SlotIndex,
    /// security id → live slots
    by_security: SlotIndex,
    /// security id → aggregate snapshot; entries exist only while the
    /// security has live orders
    snapshots: HashMap<String, SecuritySnapshot>,
}

impl OrderCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with pre-reserved capacity
    ///
    /// `orders` sizes the primary store; `keys` sizes the per-user and
    /// per-security maps.
    pub fn with_capacity(orders: usize, keys: usize) -> Self {
        Self {
            store: SlotStore::with_capacity(orders),
            by_user: SlotIndex::with_capacity(keys),
            by_security: SlotIndex::with_capacity(keys),
            snapshots: HashMap::with_capacity(keys),
        }
    }

    /// Add an order to the cache
    ///
    /// Fails on any validation error; nothing is committed on failure. An
    /// order whose slot is already alive is silently ignored — duplicate
    /// adds do not overwrite and do not error.
    pub fn add_order(&mut self, order: Order) -> Result<(), CacheError> {
        validator::validate(&order)?;
        let slot = order
            .order_id
            .slot()
            .ok_or_else(|| CacheError::MalformedOrderId(order.order_id.to_string()))?;

        if self.store.contains(slot) {
            debug!(order_id = %order.order_id, "duplicate add ignored");
            return Ok(());
        }

        self.by_user.insert(&order.user, slot);
        self.by_security.insert(order.security_id.as_str(), slot);
        self.snapshots
            .entry(order.security_id.as_str().to_owned())
            .or_default()
            .apply(&order);

        debug!(
            order_id = %order.order_id,
            security_id = %order.security_id,
            side = %order.side,
            qty = %order.qty,
            "order added"
        );
        self.store.insert(slot, order);
        Ok(())
    }

    /// Cancel the order with this id
    ///
    /// Fails only when the id itself is malformed; cancelling an id that is
    /// not live is a no-op.
    pub fn cancel_order(&mut self, order_id: &OrderId) -> Result<(), CacheError> {
        let slot = order_id
            .slot()
            .ok_or_else(|| CacheError::MalformedOrderId(order_id.to_string()))?;
        self.cancel_slot(slot);
        Ok(())
    }

    /// Cancel all orders belonging to `user`
    pub fn cancel_orders_for_user(&mut self, user: &str) {
        let slots = self.by_user.snapshot(user);
        let mut canceled = 0usize;
        for slot in slots {
            if self.cancel_slot(slot) {
                canceled += 1;
            }
        }
        if canceled > 0 {
            debug!(user, canceled, "canceled orders for user");
        }
    }

    /// Cancel all orders on `security_id` with qty ≥ `min_qty`
    ///
    /// A zero `min_qty` is a no-op. Liveness and quantity are re-checked at
    /// visit time, so entries cancelled earlier in the sweep are tolerated.
    pub fn cancel_orders_for_security_with_min_qty(
        &mut self,
        security_id: &SecurityId,
        min_qty: Quantity,
    ) {
        if min_qty.is_zero() {
            return;
        }

        let slots = self.by_security.snapshot(security_id.as_str());
        let mut canceled = 0usize;
        for slot in slots {
            let Some(qty) = self.store.get(slot).map(|order| order.qty) else {
                continue;
            };
            if qty >= min_qty && self.cancel_slot(slot) {
                canceled += 1;
            }
        }
        if canceled > 0 {
            debug!(security_id = %security_id, min_qty = %min_qty, canceled, "canceled orders for security");
        }
    }

    /// Total quantity that can match on this security
    ///
    /// O(1) read of the security's snapshot; 0 for an unknown security.
    pub fn matching_size(&self, security_id: &SecurityId) -> u32 {
        self.snapshots
            .get(security_id.as_str())
            .map(matching::matching_size)
            .unwrap_or(0)
    }

    /// Copy out all live orders, in unspecified order
    pub fn all_orders(&self) -> Vec<Order> {
        self.store.iter().cloned().collect()
    }

    /// Number of live orders
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Remove a live slot from all four views
    ///
    /// Returns false when the slot has no live order.
    fn cancel_slot(&mut self, slot: u64) -> bool {
        let Some(order) = self.store.remove(slot) else {
            return false;
        };

        self.by_user.remove(&order.user, slot);
        self.by_security.remove(order.security_id.as_str(), slot);

        if let Some(snapshot) = self.snapshots.get_mut(order.security_id.as_str()) {
            snapshot.retract(&order);
            if snapshot.is_empty() {
                self.snapshots.remove(order.security_id.as_str());
            }
        }

        debug!(order_id = %order.order_id, "order canceled");
        true
    }
}
