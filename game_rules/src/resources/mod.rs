//! Resource kinds and the bounded resource ledger.

mod ledger;

pub use ledger::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ParseResourceError;

/// Lowest value any resource can hold.
pub const RESOURCE_MIN: i32 = 0;

/// Highest value any resource can hold.
pub const RESOURCE_MAX: i32 = 200;

/// Starting value for every resource in a fresh run.
pub const RESOURCE_DEFAULT: i32 = 100;

/// The four gauges a ruler has to manage.
///
/// Serialized as its lowercase name so it can be used as a map key in both
/// TOML and JSON content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResourceKind {
    Wealth,
    Popularity,
    Military,
    Prestige,
}

impl ResourceKind {
    /// Every resource kind, in ledger order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Wealth,
        ResourceKind::Popularity,
        ResourceKind::Military,
        ResourceKind::Prestige,
    ];

    /// The lowercase key used in content files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Wealth => "wealth",
            ResourceKind::Popularity => "popularity",
            ResourceKind::Military => "military",
            ResourceKind::Prestige => "prestige",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ResourceKind::Wealth => 0,
            ResourceKind::Popularity => 1,
            ResourceKind::Military => 2,
            ResourceKind::Prestige => 3,
        }
    }
}

impl FromStr for ResourceKind {
    type Err = ParseResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseResourceError(s.to_string()))
    }
}

impl TryFrom<String> for ResourceKind {
    type Error = ParseResourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A batch of signed resource adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceChanges(BTreeMap<ResourceKind, i32>);

impl ResourceChanges {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delta for a resource, accumulating with any existing entry.
    pub fn with(mut self, kind: ResourceKind, delta: i32) -> Self {
        let entry = self.0.entry(kind).or_insert(0);
        *entry = entry.saturating_add(delta);
        self
    }

    /// Delta for a resource, zero when absent.
    pub fn get(&self, kind: ResourceKind) -> i32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, i32)> + '_ {
        self.0.iter().map(|(kind, delta)| (*kind, *delta))
    }
}

impl FromIterator<(ResourceKind, i32)> for ResourceChanges {
    fn from_iter<I: IntoIterator<Item = (ResourceKind, i32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |changes, (kind, delta)| changes.with(kind, delta))
    }
}

/// The price of activating a skill. Every amount is positive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillCost(BTreeMap<ResourceKind, u32>);

impl SkillCost {
    /// A cost of nothing.
    pub fn free() -> Self {
        Self::default()
    }

    /// Add a cost entry, replacing any previous amount for that resource.
    pub fn with(mut self, kind: ResourceKind, amount: u32) -> Self {
        self.0.insert(kind, amount);
        self
    }

    /// Amount charged for a resource, zero when absent.
    pub fn get(&self, kind: ResourceKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_free(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate cost entries in resource order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        self.0.iter().map(|(kind, amount)| (*kind, *amount))
    }
}
