//! Character variants
//!
//! Every kind of character carries a physique plus its own fields, and
//! decides for itself what its special ability is.

use serde::Serialize;

/// Capability shared by every kind of character
pub trait Archetype {
    /// Type name of the concrete kind (e.g. "Alien")
    fn kind_name(&self) -> &'static str;

    /// Description of the kind's special ability
    fn special_ability(&self) -> &str;
}

/// Body measurements common to all variants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Physique {
    pub age: u32,
    /// Meters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
}

impl Physique {
    pub fn new(age: u32, height: f64, weight: f64) -> Self {
        Self { age, height, weight }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Human {
    #[serde(flatten)]
    pub physique: Physique,
    pub occupation: String,
    pub gender: String,
}

impl Human {
    pub fn new(physique: Physique, occupation: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            physique,
            occupation: occupation.into(),
            gender: gender.into(),
        }
    }
}

impl Archetype for Human {
    fn kind_name(&self) -> &'static str {
        "Human"
    }

    fn special_ability(&self) -> &str {
        "none"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuperHuman {
    #[serde(flatten)]
    pub physique: Physique,
    pub superpower: String,
    pub secret_identity: String,
}

impl SuperHuman {
    pub fn new(physique: Physique, superpower: impl Into<String>, secret_identity: impl Into<String>) -> Self {
        Self {
            physique,
            superpower: superpower.into(),
            secret_identity: secret_identity.into(),
        }
    }
}

impl Archetype for SuperHuman {
    fn kind_name(&self) -> &'static str {
        "SuperHuman"
    }

    // Fixed regardless of `superpower`
    fn special_ability(&self) -> &str {
        "super-strength"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artificial {
    #[serde(flatten)]
    pub physique: Physique,
    pub intelligence_level: String,
    pub processing_capacity: String,
}

impl Artificial {
    pub fn new(
        physique: Physique,
        intelligence_level: impl Into<String>,
        processing_capacity: impl Into<String>,
    ) -> Self {
        Self {
            physique,
            intelligence_level: intelligence_level.into(),
            processing_capacity: processing_capacity.into(),
        }
    }
}

impl Archetype for Artificial {
    fn kind_name(&self) -> &'static str {
        "Artificial"
    }

    fn special_ability(&self) -> &str {
        "advanced artificial intelligence"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alien {
    #[serde(flatten)]
    pub physique: Physique,
    pub home_planet: String,
    /// Free-text special ability, reported as-is
    pub ability: String,
}

impl Alien {
    pub fn new(physique: Physique, home_planet: impl Into<String>, ability: impl Into<String>) -> Self {
        Self {
            physique,
            home_planet: home_planet.into(),
            ability: ability.into(),
        }
    }
}

impl Archetype for Alien {
    fn kind_name(&self) -> &'static str {
        "Alien"
    }

    fn special_ability(&self) -> &str {
        &self.ability
    }
}

/// The closed set of character kinds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Variant {
    Human(Human),
    SuperHuman(SuperHuman),
    Artificial(Artificial),
    Alien(Alien),
}

impl Variant {
    fn archetype(&self) -> &dyn Archetype {
        match self {
            Variant::Human(v) => v,
            Variant::SuperHuman(v) => v,
            Variant::Artificial(v) => v,
            Variant::Alien(v) => v,
        }
    }
}

impl Archetype for Variant {
    fn kind_name(&self) -> &'static str {
        self.archetype().kind_name()
    }

    fn special_ability(&self) -> &str {
        self.archetype().special_ability()
    }
}

impl From<Human> for Variant {
    fn from(v: Human) -> Self {
        Variant::Human(v)
    }
}

impl From<SuperHuman> for Variant {
    fn from(v: SuperHuman) -> Self {
        Variant::SuperHuman(v)
    }
}

impl From<Artificial> for Variant {
    fn from(v: Artificial) -> Self {
        Variant::Artificial(v)
    }
}

impl From<Alien> for Variant {
    fn from(v: Alien) -> Self {
        Variant::Alien(v)
    }
}

/// Static description of one kind, for `charsheet variants`
#[derive(Debug, Clone, Serialize)]
pub struct KindInfo {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub special_ability: &'static str,
}

pub const KINDS: [KindInfo; 4] = [
    KindInfo {
        name: "Human",
        fields: &["age", "height", "weight", "occupation", "gender"],
        special_ability: "always \"none\"",
    },
    KindInfo {
        name: "SuperHuman",
        fields: &["age", "height", "weight", "superpower", "secret_identity"],
        special_ability: "always \"super-strength\"",
    },
    KindInfo {
        name: "Artificial",
        fields: &["age", "height", "weight", "intelligence_level", "processing_capacity"],
        special_ability: "always \"advanced artificial intelligence\"",
    },
    KindInfo {
        name: "Alien",
        fields: &["age", "height", "weight", "home_planet", "ability"],
        special_ability: "the stored ability text",
    },
];
