// this_file: crates/fontembed-cli/src/commands/encode.rs

//! Encode command implementation

use anyhow::{Context, Result};
use fontembed_core::{encode_subset, AssetLayout, Subset};

pub fn run(layout: &AssetLayout, subsets: &[Subset], quiet: bool) -> Result<()> {
    for &subset in subsets {
        let report = encode_subset(layout, subset)
            .with_context(|| format!("Failed to encode {}", subset))?;
        if !quiet {
            println!(
                "{} -> {} ({} bytes)",
                report.input, report.output, report.uri_len
            );
        }
    }
    Ok(())
}
