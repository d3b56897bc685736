//! Characterization traits
//!
//! A trait is one labelled line on a character sheet: a category (power,
//! skill, weakness, weapon or personality) plus free text.

use serde::{Deserialize, Serialize};

/// Text used when a trait is created without a description
pub const UNSPECIFIED: &str = "none";

/// Trait categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitCategory {
    Power,
    Skill,
    Weakness,
    Weapon,
    Personality,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 5] = [
        TraitCategory::Power,
        TraitCategory::Skill,
        TraitCategory::Weakness,
        TraitCategory::Weapon,
        TraitCategory::Personality,
    ];

    /// Fixed label shown in front of the trait text
    pub fn label(&self) -> &'static str {
        match self {
            TraitCategory::Power => "Powers",
            TraitCategory::Skill => "Exceptional skills",
            TraitCategory::Weakness => "Weaknesses",
            TraitCategory::Weapon => "Weapons",
            TraitCategory::Personality => "Personality",
        }
    }

    /// One-line explanation for `charsheet traits`
    pub fn summary(&self) -> &'static str {
        match self {
            TraitCategory::Power => "Supernatural or extraordinary powers the character wields.",
            TraitCategory::Skill => "Trained abilities that set the character apart.",
            TraitCategory::Weakness => "Flaws, vulnerabilities and things that bring the character down.",
            TraitCategory::Weapon => "Gear and arms the character carries into a fight.",
            TraitCategory::Personality => "Temperament and manner: how the character behaves.",
        }
    }
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for TraitCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "power" => Ok(TraitCategory::Power),
            "skill" => Ok(TraitCategory::Skill),
            "weakness" => Ok(TraitCategory::Weakness),
            "weapon" => Ok(TraitCategory::Weapon),
            "personality" => Ok(TraitCategory::Personality),
            _ => Err(format!(
                "Unknown trait category: {} (expected one of: power, skill, weakness, weapon, personality)",
                s
            )),
        }
    }
}

/// A single characterization attached to a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trait {
    category: TraitCategory,
    text: String,
}

impl Trait {
    pub fn new(category: TraitCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// A trait of the given category with no description
    pub fn unspecified(category: TraitCategory) -> Self {
        Self::new(category, UNSPECIFIED)
    }

    pub fn power(text: impl Into<String>) -> Self {
        Self::new(TraitCategory::Power, text)
    }

    #[allow(dead_code)] // The CLI builds traits through FromStr
    pub fn skill(text: impl Into<String>) -> Self {
        Self::new(TraitCategory::Skill, text)
    }

    #[allow(dead_code)] // The CLI builds traits through FromStr
    pub fn weakness(text: impl Into<String>) -> Self {
        Self::new(TraitCategory::Weakness, text)
    }

    #[allow(dead_code)] // The CLI builds traits through FromStr
    pub fn weapon(text: impl Into<String>) -> Self {
        Self::new(TraitCategory::Weapon, text)
    }

    pub fn personality(text: impl Into<String>) -> Self {
        Self::new(TraitCategory::Personality, text)
    }

    pub fn category(&self) -> TraitCategory {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Label and text pair for display
    pub fn describe(&self) -> (&'static str, &str) {
        (self.category.label(), &self.text)
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (label, text) = self.describe();
        write!(f, "{}: {}", label, text)
    }
}

/// Parses `category=text`, or a bare `category` for an undescribed trait
impl std::str::FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((category, text)) => Ok(Trait::new(category.parse()?, text.trim())),
            None => Ok(Trait::unspecified(s.parse()?)),
        }
    }
}
