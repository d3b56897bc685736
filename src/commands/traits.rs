use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::character::traits::TraitCategory;
use crate::cli::OutputFormat;

pub fn run(format: OutputFormat) -> Result<()> {
    #[derive(Serialize)]
    struct CategoryInfo {
        name: String,
        label: &'static str,
        description: &'static str,
    }

    let infos: Vec<CategoryInfo> = TraitCategory::ALL
        .iter()
        .map(|c| CategoryInfo {
            name: c.to_string(),
            label: c.label(),
            description: c.summary(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&infos)?),
        OutputFormat::Text => {
            println!("{}", "Trait Categories:".bold());
            println!();

            for info in &infos {
                println!("  {} {} {}", info.name.cyan().bold(), "-".dimmed(), info.label);
                println!("    {}", info.description.dimmed());
            }

            println!();
            println!("Add traits with: {}", "charsheet build <kind> ... --trait power=telekinesis".cyan());
        }
    }

    Ok(())
}
