// this_file: crates/fontembed-core/src/css.rs

//! `@font-face` rules for embedding a data URI in an SVG `<style>` block.
//!
//! ```text
//! <svg ...>
//!     <style type="text/css">
//!         @font-face { font-family: FiraCode-Regular; src: url(data:...); }
//!     </style>
//!     <text font-family="FiraCode-Regular">...</text>
//! </svg>
//! ```

use crate::error::Result;
use crate::layout::{read_string, AssetLayout};
use crate::subset::Subset;

/// Render an `@font-face` rule that loads `data_uri` under `family`.
pub fn font_face_rule(family: &str, data_uri: &str) -> String {
    format!(
        "@font-face {{\n    font-family: {};\n    src: url({});\n}}",
        family,
        data_uri.trim()
    )
}

/// Build the rule for a subset from its already-encoded data URI file.
pub fn subset_font_face_rule(
    layout: &AssetLayout,
    subset: Subset,
    family: Option<&str>,
) -> Result<String> {
    let uri = read_string(&layout.data_uri_path(subset))?;
    Ok(font_face_rule(family.unwrap_or(subset.family()), &uri))
}
