//! Per-security aggregate snapshot
//!
//! Tracks, for one security, the total live buy and sell quantity, each
//! company's (buy, sell) sums, and the ordered multiset of combined company
//! volumes. Every add or cancel folds into the snapshot incrementally, so
//! the matching-size query never walks the orders.

pub mod volumes;

pub use volumes::{CompanyVolume, VolumeMultiset};

use std::collections::HashMap;
use types::order::{Order, Side};

/// Aggregate state for a single security
///
/// The snapshot is only ever updated through [`apply`] and [`retract`],
/// which keep the multiset entry for a company in lockstep with its
/// combined volume: exactly one entry while the volume is positive, none
/// once it reaches zero.
///
/// [`apply`]: SecuritySnapshot::apply
/// [`retract`]: SecuritySnapshot::retract
#[derive(Debug, Clone, Default)]
pub struct SecuritySnapshot {
    total_buy: u64,
    total_sell: u64,
    company_volumes: HashMap<String, CompanyVolume>,
    max_volumes: VolumeMultiset,
}

impl SecuritySnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an added order into the snapshot
    pub fn apply(&mut self, order: &Order) {
        let qty = order.qty.widen();
        let volume = self.company_volumes.entry(order.company.clone()).or_default();

        let old_combined = volume.combined();
        if old_combined > 0 {
            self.max_volumes.remove(old_combined);
        }

        match order.side {
            Side::Buy => {
                self.total_buy += qty;
                volume.buy += qty;
            }
            Side::Sell => {
                self.total_sell += qty;
                volume.sell += qty;
            }
        }

        self.max_volumes.insert(volume.combined());
    }

    /// Fold a cancelled order out of the snapshot
    ///
    /// The company entry is dropped once both of its components reach zero
    /// so the map stays bounded by the active companies.
    pub fn retract(&mut self, order: &Order) {
        let qty = order.qty.widen();
        let Some(volume) = self.company_volumes.get_mut(&order.company) else {
            return;
        };

        self.max_volumes.remove(volume.combined());

        match order.side {
            Side::Buy => {
                self.total_buy = self.total_buy.saturating_sub(qty);
                volume.buy = volume.buy.saturating_sub(qty);
            }
            Side::Sell => {
                self.total_sell = self.total_sell.saturating_sub(qty);
                volume.sell = volume.sell.saturating_sub(qty);
            }
        }

        let new_combined = volume.combined();
        if new_combined > 0 {
            self.max_volumes.insert(new_combined);
        }

        if volume.is_zero() {
            self.company_volumes.remove(&order.company);
        }
    }

    /// Sum of live buy quantity
    pub fn total_buy(&self) -> u64 {
        self.total_buy
    }

    /// Sum of live sell quantity
    pub fn total_sell(&self) -> u64 {
        self.total_sell
    }

    /// Largest combined volume of any single company, 0 when none are active
    pub fn max_volume(&self) -> u64 {
        self.max_volumes.max().unwrap_or(0)
    }

    /// The (buy, sell) sums for one company
    pub fn company_volume(&self, company: &str) -> Option<CompanyVolume> {
        self.company_volumes.get(company).copied()
    }

    /// Number of companies with live volume
    pub fn company_count(&self) -> usize {
        self.company_volumes.len()
    }

    /// True once no company has any live volume
    pub fn is_empty(&self) -> bool {
        self.company_volumes.is_empty()
    }
}
