//! The resource ledger.

use serde::{Deserialize, Serialize};

use crate::error::LedgerRangeError;

use super::{ResourceChanges, ResourceKind, SkillCost, RESOURCE_DEFAULT, RESOURCE_MAX, RESOURCE_MIN};

/// Current amount of every resource, each held within
/// [`RESOURCE_MIN`, `RESOURCE_MAX`].
///
/// Serialized as the four amounts in [`ResourceKind::ALL`] order; restoring
/// rejects any amount outside the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[i32; 4]", into = "[i32; 4]")]
pub struct ResourceLedger {
    amounts: [i32; 4],
}

/// The first resource a cost could not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub resource: ResourceKind,
    pub required: u32,
    pub available: i32,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self::filled(RESOURCE_DEFAULT)
    }
}

impl ResourceLedger {
    /// Create a ledger with every resource at the starting value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with every resource at `amount` (clamped).
    pub fn filled(amount: i32) -> Self {
        Self {
            amounts: [clamp(amount); 4],
        }
    }

    /// Create a ledger from explicit starting values (clamped).
    pub fn from_amounts(amounts: impl IntoIterator<Item = (ResourceKind, i32)>) -> Self {
        let mut ledger = Self::filled(RESOURCE_MIN);
        for (kind, amount) in amounts {
            ledger.amounts[kind.index()] = clamp(amount);
        }
        ledger
    }

    /// Get the amount held of a resource.
    pub fn get(&self, kind: ResourceKind) -> i32 {
        self.amounts[kind.index()]
    }

    /// Iterate all resources in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, i32)> + '_ {
        ResourceKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Apply a batch of deltas, clamping every result into range.
    ///
    /// Never fails: out-of-range results are pinned to the nearest bound.
    pub fn apply_delta(&mut self, changes: &ResourceChanges) {
        for (kind, delta) in changes.iter() {
            let slot = &mut self.amounts[kind.index()];
            let before = *slot;
            *slot = clamp(before.saturating_add(delta));
            tracing::debug!(resource = %kind, before, delta, after = *slot, "resource delta applied");
        }
    }

    /// Check whether a cost can be paid, returning the first shortfall if not.
    pub fn shortfall(&self, cost: &SkillCost) -> Option<Shortfall> {
        cost.iter().find_map(|(resource, required)| {
            let available = self.get(resource);
            if i64::from(available) < i64::from(required) {
                Some(Shortfall {
                    resource,
                    required,
                    available,
                })
            } else {
                None
            }
        })
    }

    /// Whether every entry of the cost is covered.
    pub fn can_afford(&self, cost: &SkillCost) -> bool {
        self.shortfall(cost).is_none()
    }

    /// Pay a cost, or report the first shortfall and leave the ledger untouched.
    pub fn debit(&mut self, cost: &SkillCost) -> Result<(), Shortfall> {
        if let Some(shortfall) = self.shortfall(cost) {
            return Err(shortfall);
        }
        for (kind, amount) in cost.iter() {
            // Affordable, so amount <= current <= RESOURCE_MAX and fits in i32.
            self.amounts[kind.index()] -= amount as i32;
        }
        Ok(())
    }
}

impl TryFrom<[i32; 4]> for ResourceLedger {
    type Error = LedgerRangeError;

    fn try_from(amounts: [i32; 4]) -> Result<Self, Self::Error> {
        for (resource, amount) in ResourceKind::ALL.into_iter().zip(amounts) {
            if !(RESOURCE_MIN..=RESOURCE_MAX).contains(&amount) {
                return Err(LedgerRangeError { resource, amount });
            }
        }
        Ok(Self { amounts })
    }
}

impl From<ResourceLedger> for [i32; 4] {
    fn from(ledger: ResourceLedger) -> Self {
        ledger.amounts
    }
}

fn clamp(value: i32) -> i32 {
    value.clamp(RESOURCE_MIN, RESOURCE_MAX)
}
