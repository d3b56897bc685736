//! Build one character from command-line arguments

use eyre::Result;
use log::{debug, info};

use crate::character::Character;
use crate::character::sheet::{CharacterSheet, Sheet};
use crate::character::variant::{Alien, Artificial, Human, Physique, SuperHuman, Variant};
use crate::cli::{BuildKind, CommonArgs, OutputFormat};
use crate::commands::render;
use crate::config::Config;

pub fn run(kind: BuildKind, config: &Config) -> Result<()> {
    let (common, variant) = split(kind);
    let format = OutputFormat::resolve(common.format, config.output.format);
    let character = build(common, variant);

    info!("Built character: {}", character.describe());
    render::print_characters(std::slice::from_ref(&character), format)
}

fn split(kind: BuildKind) -> (CommonArgs, Variant) {
    match kind {
        BuildKind::Human {
            common,
            occupation,
            gender,
        } => {
            let variant = Human::new(physique(&common), occupation, gender).into();
            (common, variant)
        }
        BuildKind::SuperHuman {
            common,
            superpower,
            secret_identity,
        } => {
            let variant = SuperHuman::new(physique(&common), superpower, secret_identity).into();
            (common, variant)
        }
        BuildKind::Artificial {
            common,
            intelligence_level,
            processing_capacity,
        } => {
            let variant = Artificial::new(physique(&common), intelligence_level, processing_capacity).into();
            (common, variant)
        }
        BuildKind::Alien {
            common,
            home_planet,
            ability,
        } => {
            let variant = Alien::new(physique(&common), home_planet, ability).into();
            (common, variant)
        }
    }
}

fn physique(common: &CommonArgs) -> Physique {
    Physique::new(common.age, common.height, common.weight)
}

/// Construct the character and fill in its sheet
fn build(common: CommonArgs, variant: Variant) -> Character {
    let mut character = Character::new(common.name, variant);
    let mut sheet = Sheet::new(&mut character);

    for trait_ in common.traits {
        sheet.add(trait_);
    }
    if let Some(ref league) = common.league {
        sheet.set_league(league);
    }
    if let Some(ref rival) = common.rival {
        sheet.set_rival(rival);
    }
    debug!(
        "Filled sheet: {} with {} trait(s)",
        sheet.character().describe(),
        sheet.character().traits().len()
    );

    character
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::traits::Trait;
    use crate::character::variant::Archetype;

    fn common(name: &str) -> CommonArgs {
        CommonArgs {
            name: name.to_string(),
            age: 35,
            height: 1.9,
            weight: 95.0,
            traits: vec![Trait::weakness("kryptonite"), Trait::skill("journalism")],
            league: Some("Justice League".to_string()),
            rival: None,
            format: None,
        }
    }

    #[test]
    fn test_build_superhuman() {
        let (common, variant) = split(BuildKind::SuperHuman {
            common: common("Kal-El"),
            superpower: "flight".to_string(),
            secret_identity: "Clark Kent".to_string(),
        });
        assert_eq!(variant.kind_name(), "SuperHuman");
        match &variant {
            Variant::SuperHuman(v) => assert_eq!(v.physique, Physique::new(35, 1.9, 95.0)),
            other => panic!("expected SuperHuman, got {:?}", other),
        }

        let character = build(common, variant);
        assert_eq!(character.name(), "Kal-El");
        assert_eq!(character.special_ability(), "super-strength");
        assert_eq!(character.traits()[0].describe(), ("Weaknesses", "kryptonite"));
        assert_eq!(character.traits()[1].describe(), ("Exceptional skills", "journalism"));
        assert_eq!(character.league(), "Justice League");
        assert_eq!(character.rival(), "none");
    }

    #[test]
    fn test_build_alien_uses_ability() {
        let (common, variant) = split(BuildKind::Alien {
            common: common("Zorg"),
            home_planet: "Mars".to_string(),
            ability: "Mind reading".to_string(),
        });
        let character = build(common, variant);
        assert_eq!(character.describe(), "I am Zorg, a Alien");
        assert_eq!(character.special_ability(), "Mind reading");
    }
}
