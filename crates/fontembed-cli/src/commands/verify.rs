// this_file: crates/fontembed-cli/src/commands/verify.rs

//! Verify command implementation
//!
//! Reports every stale artifact before failing, so one run lists them all.

use anyhow::{bail, Context, Result};
use fontembed_core::{verify_subset, AssetLayout, Subset};

pub fn run(layout: &AssetLayout, subsets: &[Subset], quiet: bool) -> Result<()> {
    let mut stale = 0;

    for &subset in subsets {
        let mismatches = verify_subset(layout, subset)
            .with_context(|| format!("Failed to verify {}", subset))?;
        if mismatches.is_empty() && !quiet {
            println!("{}: ok", subset);
        }
        for mismatch in &mismatches {
            eprintln!("{}", mismatch);
        }
        stale += mismatches.len();
    }

    if stale > 0 {
        bail!("{} artifact(s) out of date", stale);
    }
    Ok(())
}
