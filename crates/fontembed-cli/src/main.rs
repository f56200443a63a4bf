// this_file: crates/fontembed-cli/src/main.rs

//! fontembed CLI: data URIs and glyph lists for SVG-embedded font subsets.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use fontembed_core::{AssetLayout, Subset};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let layout = AssetLayout::new(&cli.base_dir);
    log::debug!("Using output directory {}", layout.output_dir());

    match cli.command.unwrap_or(Commands::All) {
        Commands::Encode(select) => commands::encode::run(&layout, &select.subsets(), cli.quiet)?,
        Commands::Glyphs(select) => commands::glyphs::run(&layout, &select.subsets(), cli.quiet)?,
        Commands::All => {
            commands::encode::run(&layout, &Subset::ALL, cli.quiet)?;
            commands::glyphs::run(&layout, &Subset::ALL, cli.quiet)?;
        }
        Commands::Verify(select) => commands::verify::run(&layout, &select.subsets(), cli.quiet)?,
        Commands::Css(args) => {
            commands::css::run(&layout, &args.select.subsets(), args.family.as_deref())?
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
