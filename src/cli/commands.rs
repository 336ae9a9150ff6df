// src/cli/commands.rs
// Non-interactive subcommands: list, show, copy, home.

use anyhow::{bail, Context, Result};
use console::style;

use crate::catalog::{self, categories, ExampleRecord};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::content::{self, home};

use super::args::{CliArgs, OutputFormat};
use super::display::{render_card, summary_line, CardLimits, ColorTheme};

/// Resolve the record sequence a command operates on: the built-in catalog
/// or a JSON file, optionally narrowed to one category.
pub fn resolve_catalog(args: &CliArgs) -> Result<Vec<ExampleRecord>> {
    let mut records = match &args.file {
        Some(path) => catalog::load_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => content::builtin_catalog(),
    };

    if let Some(wanted) = &args.category {
        let known: Vec<String> = categories(&records)
            .iter()
            .map(|c| c.to_string())
            .collect();
        records.retain(|r| r.category.eq_ignore_ascii_case(wanted));
        if records.is_empty() {
            bail!(
                "no examples in category '{}' (known categories: {})",
                wanted,
                known.join(", ")
            );
        }
    }

    Ok(records)
}

/// Convert a 1-based command line index into a record.
fn record_at(records: &[ExampleRecord], index: usize) -> Result<&ExampleRecord> {
    if index == 0 || index > records.len() {
        bail!("index {} is out of range (1-{})", index, records.len());
    }
    Ok(&records[index - 1])
}

pub fn run_list(records: &[ExampleRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Text => {
            let theme = ColorTheme::default();
            println!("{}\n", style("AgentSea examples").cyan().bold());
            for (i, record) in records.iter().enumerate() {
                println!("{}", summary_line(i, record, &theme));
                if !record.tags.is_empty() {
                    let tags = record
                        .tags
                        .iter()
                        .map(|t| format!("#{t}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("      {}", style(tags).dim());
                }
            }
            println!(
                "\n{}",
                style("Use `show <n>` for a full example, or `browse` to explore interactively")
                    .dim()
            );
        }
    }
    Ok(())
}

pub fn run_show(records: &[ExampleRecord], index: usize, format: OutputFormat) -> Result<()> {
    let record = record_at(records, index)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            let lines = render_card(
                record,
                true,
                false,
                &ColorTheme::default(),
                &CardLimits::from_config(),
            );
            for line in &lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Direct copy from the command line. Unlike the browser's fire-and-forget
/// action, this surface reports clipboard failures to the caller.
pub fn run_copy(records: &[ExampleRecord], index: usize) -> Result<()> {
    let record = record_at(records, index)?;
    let mut clipboard = SystemClipboard::new().context("could not open the system clipboard")?;
    clipboard
        .copy_text(&record.code)
        .context("could not write to the system clipboard")?;
    println!(
        "{} copied '{}' to the clipboard",
        style("✓").green(),
        record.title
    );
    Ok(())
}

pub fn run_home() -> Result<()> {
    println!(
        "\n  {}  {}",
        style(home::HERO_TITLE).cyan().bold(),
        style(home::HERO_TAGLINE).bold()
    );
    println!("\n  {}\n", home::HERO_PITCH);
    for feature in home::FEATURES {
        println!(
            "  {} {}  {}",
            feature.icon,
            style(feature.title).bold(),
            style(feature.blurb).dim()
        );
    }
    println!(
        "\n  {} {}\n",
        style("Get started:").bold(),
        style(home::GETTING_STARTED).cyan()
    );
    Ok(())
}
