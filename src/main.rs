// src/main.rs

use clap::Parser;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

use agentsea_catalog::catalog::CatalogView;
use agentsea_catalog::cli::{commands, CatalogBrowser, CliArgs, Command};
use agentsea_catalog::config::CONFIG;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Diagnostics go to stderr so they never land inside rendered cards.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(CONFIG.tracing_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !CONFIG.color {
        console::set_colors_enabled(false);
    }

    let records = commands::resolve_catalog(&args)?;
    debug!("catalog resolved with {} records", records.len());

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => CatalogBrowser::new(CatalogView::new(records)).run(),
        Command::List { format } => commands::run_list(&records, format),
        Command::Show { index, format } => commands::run_show(&records, index, format),
        Command::Copy { index } => commands::run_copy(&records, index),
        Command::Home => commands::run_home(),
    }
}
