use colored::*;
use eyre::Result;

use crate::character::variant::KINDS;
use crate::cli::OutputFormat;

pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&KINDS)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&KINDS)?),
        OutputFormat::Text => {
            println!("{}", "Character Kinds:".bold());
            println!();

            for kind in &KINDS {
                println!("  {} {}", "●".green(), kind.name.bold());
                println!("    Fields: {}", kind.fields.join(", ").cyan());
                println!("    Special ability: {}", kind.special_ability.magenta());
                println!();
            }
        }
    }

    Ok(())
}
