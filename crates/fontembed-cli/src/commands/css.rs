// this_file: crates/fontembed-cli/src/commands/css.rs

//! Css command implementation

use anyhow::{Context, Result};
use fontembed_core::{subset_font_face_rule, AssetLayout, Subset};

pub fn run(layout: &AssetLayout, subsets: &[Subset], family: Option<&str>) -> Result<()> {
    let mut rules = Vec::with_capacity(subsets.len());
    for &subset in subsets {
        let rule = subset_font_face_rule(layout, subset, family)
            .with_context(|| format!("Failed to build @font-face rule for {}", subset))?;
        rules.push(rule);
    }
    println!("{}", rules.join("\n\n"));
    Ok(())
}
