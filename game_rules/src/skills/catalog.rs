//! The skill catalog - every card in the game, loaded once from TOML.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{Citation, Rarity, Skill, SkillCategory, SkillId};
use crate::error::CatalogError;
use crate::resources::SkillCost;

const BUILTIN_SKILLS: &str = include_str!("../../data/skills.toml");

/// Read-only collection of skill definitions, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
    index: HashMap<SkillId, usize>,
}

impl SkillCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog shipped with the game.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse_toml(BUILTIN_SKILLS)
    }

    /// Load a catalog from a TOML file.
    pub fn load_from_toml(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self, CatalogError> {
        let toml_data: TomlSkills = toml::from_str(content)?;

        let mut catalog = Self::new();
        for raw in toml_data.skills {
            catalog.add(raw.into_skill()?)?;
        }
        tracing::debug!(skills = catalog.len(), "skill catalog loaded");
        Ok(catalog)
    }

    /// Add a skill. Ids must be unique.
    pub fn add(&mut self, skill: Skill) -> Result<(), CatalogError> {
        if self.index.contains_key(&skill.id) {
            return Err(CatalogError::DuplicateSkill(skill.id));
        }
        self.index.insert(skill.id.clone(), self.skills.len());
        self.skills.push(skill);
        Ok(())
    }

    /// Get a skill by ID.
    pub fn get(&self, id: &SkillId) -> Option<&Skill> {
        self.index.get(id).map(|&i| &self.skills[i])
    }

    pub fn contains(&self, id: &SkillId) -> bool {
        self.index.contains_key(id)
    }

    /// All skills in declaration order.
    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    /// Skills of one category, in declaration order.
    pub fn by_category(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct TomlSkills {
    #[serde(default)]
    skills: Vec<TomlSkill>,
}

#[derive(Debug, Deserialize)]
struct TomlSkill {
    id: SkillId,
    name: String,
    category: SkillCategory,
    rarity: u8,
    description: String,
    #[serde(default)]
    cost: SkillCost,
    effect: String,
    #[serde(default)]
    cooldown: u32,
    quote: String,
    source: String,
}

impl TomlSkill {
    fn into_skill(self) -> Result<Skill, CatalogError> {
        let rarity = Rarity::new(self.rarity).ok_or_else(|| CatalogError::InvalidRarity {
            skill: self.id.clone(),
            rarity: self.rarity,
        })?;

        if let Some((resource, _)) = self.cost.iter().find(|(_, amount)| *amount == 0) {
            return Err(CatalogError::ZeroCost {
                skill: self.id,
                resource,
            });
        }

        Ok(Skill {
            id: self.id,
            name: self.name,
            category: self.category,
            rarity,
            description: self.description,
            cost: self.cost,
            effect: self.effect,
            cooldown_turns: self.cooldown,
            citation: Citation {
                quote: self.quote,
                source: self.source,
            },
        })
    }
}
