//! The two sample characters

use eyre::Result;
use log::info;

use crate::character::Character;
use crate::character::sheet::{CharacterSheet, Sheet};
use crate::character::traits::Trait;
use crate::character::variant::{Alien, Human, Physique};
use crate::cli::OutputFormat;
use crate::commands::render;

pub fn run(format: OutputFormat) -> Result<()> {
    let characters = sample_characters();
    info!("Built {} sample characters", characters.len());
    render::print_characters(&characters, format)
}

/// E.T. the alien and Carlos the human, filled in through their sheets
pub fn sample_characters() -> Vec<Character> {
    let mut alien = Character::new(
        "E.T.",
        Alien::new(Physique::new(99, 1.2, 30.0), "Xenon", "Teleportation"),
    );
    let mut sheet = Sheet::new(&mut alien);
    sheet.add(Trait::power("telekinesis"));
    sheet.add(Trait::personality("grumpy"));
    sheet.set_league("Intergalactic Alliance");
    sheet.set_rival("Forces of Darkness");

    let mut human = Character::new(
        "Carlos",
        Human::new(Physique::new(30, 1.8, 70.0), "Programmer", "Male"),
    );
    let mut sheet = Sheet::new(&mut human);
    sheet.add(Trait::power("intelligence"));
    sheet.add(Trait::personality("shy"));
    sheet.set_league("Avengers");
    sheet.set_rival("Razor");

    vec![alien, human]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_alien() {
        let characters = sample_characters();
        let alien = &characters[0];

        assert_eq!(alien.describe(), "I am E.T., a Alien");
        assert_eq!(alien.traits(), [Trait::power("telekinesis"), Trait::personality("grumpy")]);
        assert!(alien.special_ability().contains("Teleportation"));
        assert_eq!(alien.league(), "Intergalactic Alliance");
        assert_eq!(alien.rival(), "Forces of Darkness");
    }

    #[test]
    fn test_sample_human() {
        let characters = sample_characters();
        let human = &characters[1];

        assert_eq!(human.kind_name(), "Human");
        assert_eq!(human.traits().len(), 2);
        assert_eq!(human.special_ability(), "none");
        assert_eq!(human.league(), "Avengers");
        assert_eq!(human.rival(), "Razor");
    }
}
