//! Sheet builder
//!
//! A sheet wraps one borrowed character and fills it in: traits, league and
//! rival. It forwards to the character's own setters.

use super::Character;
use super::traits::Trait;

/// Operations available while filling in a character sheet
pub trait CharacterSheet {
    fn add(&mut self, trait_: Trait);
    fn set_league(&mut self, name: &str);
    fn set_rival(&mut self, name: &str);
}

/// Sheet over a character owned by the caller
pub struct Sheet<'a> {
    character: &'a mut Character,
}

impl<'a> Sheet<'a> {
    pub fn new(character: &'a mut Character) -> Self {
        Self { character }
    }

    pub fn character(&self) -> &Character {
        self.character
    }
}

impl CharacterSheet for Sheet<'_> {
    fn add(&mut self, trait_: Trait) {
        self.character.add_trait(trait_);
    }

    fn set_league(&mut self, name: &str) {
        self.character.set_league(name);
    }

    fn set_rival(&mut self, name: &str) {
        self.character.set_rival(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::variant::{Alien, Human, Physique};

    #[test]
    fn test_alien_sheet_end_to_end() {
        let mut alien = Character::new("E.T.", Alien::new(Physique::new(99, 1.2, 30.0), "Xenon", "Teleportation"));
        let mut sheet = Sheet::new(&mut alien);
        sheet.add(Trait::power("telekinesis"));
        sheet.add(Trait::personality("grumpy"));
        sheet.set_league("Intergalactic Alliance");
        sheet.set_rival("Forces of Darkness");

        assert_eq!(alien.traits().len(), 2);
        assert_eq!(alien.traits()[0].describe(), ("Powers", "telekinesis"));
        assert_eq!(alien.traits()[1].describe(), ("Personality", "grumpy"));
        assert!(alien.special_ability().contains("Teleportation"));
        assert_eq!(alien.league(), "Intergalactic Alliance");
        assert_eq!(alien.rival(), "Forces of Darkness");
    }

    #[test]
    fn test_human_sheet_end_to_end() {
        let mut human = Character::new("Carlos", Human::new(Physique::new(30, 1.8, 70.0), "Programmer", "Male"));
        let mut sheet = Sheet::new(&mut human);
        sheet.add(Trait::power("intelligence"));
        sheet.add(Trait::personality("shy"));

        assert_eq!(sheet.character().special_ability(), "none");
        assert_eq!(human.traits().len(), 2);
        assert_eq!(human.league(), "none");
    }

    #[test]
    fn test_last_write_wins() {
        let mut human = Character::new("Carlos", Human::new(Physique::new(30, 1.8, 70.0), "Programmer", "Male"));
        let mut sheet = Sheet::new(&mut human);
        sheet.set_league("Avengers");
        sheet.set_league("Justice League");
        sheet.set_rival("Razor");
        sheet.set_rival("Joker");

        assert_eq!(human.league(), "Justice League");
        assert_eq!(human.rival(), "Joker");
    }

    #[test]
    fn test_sheet_as_trait_object() {
        let mut human = Character::new("Ana", Human::new(Physique::new(25, 1.6, 55.0), "Pilot", "Female"));
        {
            let mut sheet = Sheet::new(&mut human);
            let sheet: &mut dyn CharacterSheet = &mut sheet;
            sheet.add(Trait::weapon("wrench"));
        }
        assert_eq!(human.traits()[0].to_string(), "Weapons: wrench");
    }
}
