//! Character output in text, JSON or YAML

use colored::*;
use eyre::Result;
use serde::Serialize;
use std::io::{self, Write};

use crate::character::Character;
use crate::character::traits::TraitCategory;
use crate::character::variant::Variant;
use crate::cli::OutputFormat;

#[derive(Serialize)]
struct TraitEntry<'a> {
    category: TraitCategory,
    label: &'static str,
    text: &'a str,
}

/// Machine-readable view of one character
#[derive(Serialize)]
pub struct CharacterReport<'a> {
    name: &'a str,
    kind: &'static str,
    description: String,
    traits: Vec<TraitEntry<'a>>,
    special_ability: &'a str,
    league: &'a str,
    rival: &'a str,
    details: &'a Variant,
}

impl<'a> From<&'a Character> for CharacterReport<'a> {
    fn from(character: &'a Character) -> Self {
        Self {
            name: character.name(),
            kind: character.kind_name(),
            description: character.describe(),
            traits: character
                .traits()
                .iter()
                .map(|t| {
                    let (label, text) = t.describe();
                    TraitEntry {
                        category: t.category(),
                        label,
                        text,
                    }
                })
                .collect(),
            special_ability: character.special_ability(),
            league: character.league(),
            rival: character.rival(),
            details: character.variant(),
        }
    }
}

pub fn print_characters(characters: &[Character], format: OutputFormat) -> Result<()> {
    let reports: Vec<CharacterReport> = characters.iter().map(CharacterReport::from).collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Text => {
            let stdout = io::stdout();
            write_text(&mut stdout.lock(), characters)?;
        }
    }

    Ok(())
}

/// Name, kind, traits, special ability, league, rival; a blank line between characters
pub fn write_text<W: Write>(out: &mut W, characters: &[Character]) -> io::Result<()> {
    for (i, character) in characters.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        writeln!(out, "{}", character.name().bold())?;
        writeln!(out, "{}", character.kind_name().cyan())?;
        for trait_ in character.traits() {
            let (label, text) = trait_.describe();
            writeln!(out, "  {} {}", format!("{}:", label).dimmed(), text)?;
        }
        writeln!(out, "{} {}", "Special ability:".bold(), character.special_ability())?;
        writeln!(out, "{} {}", "League:".bold(), character.league())?;
        writeln!(out, "{} {}", "Rival:".bold(), character.rival())?;
    }

    Ok(())
}
