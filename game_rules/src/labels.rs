//! Display lookups for a presentation layer. Nothing in the rules reads these.

use crate::resources::ResourceKind;
use crate::skills::{Rarity, SkillCategory};

/// Player-facing name of a resource.
pub fn resource_name(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Wealth => "财富",
        ResourceKind::Popularity => "民心",
        ResourceKind::Military => "军力",
        ResourceKind::Prestige => "威望",
    }
}

pub fn resource_icon(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Wealth => "💰",
        ResourceKind::Popularity => "👥",
        ResourceKind::Military => "⚔️",
        ResourceKind::Prestige => "📜",
    }
}

/// Player-facing name of a card category.
pub fn category_name(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Military => "军事策略",
        SkillCategory::Politics => "政治制度",
        SkillCategory::Culture => "文化思想",
        SkillCategory::Leadership => "领导管理",
        SkillCategory::History => "历史事件",
        SkillCategory::Meta => "史家秘闻",
    }
}

/// One star per rarity level.
pub fn rarity_stars(rarity: Rarity) -> String {
    "★".repeat(rarity.get() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_stars() {
        assert_eq!(rarity_stars(Rarity::new(3).unwrap()), "★★★");
    }

    #[test]
    fn test_every_resource_has_a_label() {
        for kind in ResourceKind::ALL {
            assert!(!resource_name(kind).is_empty());
            assert!(!resource_icon(kind).is_empty());
        }
    }
}
