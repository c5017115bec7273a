//! Skill cards: the actions a player can spend resources on.

mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

use crate::resources::SkillCost;

/// Unique key of a skill card, e.g. `"muye-battle"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad grouping used for filtering the card library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Military,
    Politics,
    Culture,
    Leadership,
    History,
    /// Cards about the chronicle itself rather than an episode in it.
    Meta,
}

/// Card rarity, 1 (common) to 5 (legendary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rarity(u8);

impl Rarity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rarity, or `None` when outside 1-5.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Source passage backing a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub quote: String,
    /// Chapter the quote comes from, e.g. 《史记·周本纪》.
    pub source: String,
}

/// A skill card definition. Immutable once loaded into a [`SkillCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub category: SkillCategory,
    pub rarity: Rarity,
    pub description: String,
    pub cost: SkillCost,
    /// Display-only description of what the card does.
    pub effect: String,
    /// Declared cooldown in turns. Shown to the player but not enforced:
    /// every skill is locked for the rest of the turn it is used in, and
    /// unlocked by the next turn regardless of this value.
    pub cooldown_turns: u32,
    pub citation: Citation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_bounds() {
        assert!(Rarity::new(0).is_none());
        assert_eq!(Rarity::new(1).unwrap().get(), 1);
        assert_eq!(Rarity::new(5).unwrap().get(), 5);
        assert!(Rarity::new(6).is_none());
    }

    #[test]
    fn test_skill_id_display() {
        let id = SkillId::from("burn-boats");
        assert_eq!(id.to_string(), "burn-boats");
        assert_eq!(id.as_str(), "burn-boats");
    }
}
