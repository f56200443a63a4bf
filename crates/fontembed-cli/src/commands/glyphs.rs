// this_file: crates/fontembed-cli/src/commands/glyphs.rs

//! Glyphs command implementation

use anyhow::{Context, Result};
use fontembed_core::{write_subset_glyphs, AssetLayout, Subset};

pub fn run(layout: &AssetLayout, subsets: &[Subset], quiet: bool) -> Result<()> {
    for &subset in subsets {
        let report = write_subset_glyphs(layout, subset)
            .with_context(|| format!("Failed to write glyph list for {}", subset))?;
        if !quiet {
            println!("{} -> {} ({} glyphs)", subset, report.output, report.glyph_count);
        }
    }
    Ok(())
}
