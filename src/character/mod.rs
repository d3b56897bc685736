//! Character model
//!
//! A character is a name, a league, a rival and an ordered list of traits,
//! on top of one of the four variants:
//! - Human
//! - SuperHuman
//! - Artificial
//! - Alien

pub mod sheet;
pub mod traits;
pub mod variant;

use traits::Trait;
use variant::{Archetype, Variant};

/// Default league and rival
pub const NONE: &str = "none";

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    league: String,
    rival: String,
    traits: Vec<Trait>,
    variant: Variant,
}

impl Character {
    pub fn new(name: impl Into<String>, variant: impl Into<Variant>) -> Self {
        Self {
            name: name.into(),
            league: NONE.to_string(),
            rival: NONE.to_string(),
            traits: Vec::new(),
            variant: variant.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn league(&self) -> &str {
        &self.league
    }

    pub fn rival(&self) -> &str {
        &self.rival
    }

    /// Traits in insertion order
    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn kind_name(&self) -> &'static str {
        self.variant.kind_name()
    }

    pub fn special_ability(&self) -> &str {
        self.variant.special_ability()
    }

    /// "I am {name}, a {kind}"
    pub fn describe(&self) -> String {
        format!("I am {}, a {}", self.name, self.kind_name())
    }

    /// Append a trait; repeated categories are kept
    pub fn add_trait(&mut self, trait_: Trait) {
        log::debug!("{}: adding {} trait '{}'", self.name, trait_.category(), trait_.text());
        self.traits.push(trait_);
    }

    pub fn set_league(&mut self, league: impl Into<String>) {
        self.league = league.into();
        log::debug!("{}: league set to '{}'", self.name, self.league);
    }

    pub fn set_rival(&mut self, rival: impl Into<String>) {
        self.rival = rival.into();
        log::debug!("{}: rival set to '{}'", self.name, self.rival);
    }
}
