// this_file: crates/fontembed-core/src/glyphs.rs

//! Glyph list generator.
//!
//! Turns the text a subset has to render into the list of code points the
//! external subsetting tool must keep: one `U+XXXX` line per distinct
//! character, ascending, newline-separated, without a trailing newline.

use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{LabelError, Result};
use crate::layout::{write_string, AssetLayout};
use crate::subset::Subset;

/// What a single glyph list step wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphReport {
    pub output: Utf8PathBuf,
    /// Number of distinct code points, i.e. lines in the file
    pub glyph_count: usize,
}

/// Distinct characters of `text`, ordered by code point.
pub fn glyph_set(text: &str) -> BTreeSet<char> {
    text.chars().collect()
}

/// Format a character as `U+` and at least four upper-case hex digits.
pub fn code_point_label(ch: char) -> String {
    format!("U+{:04X}", u32::from(ch))
}

/// Parse a label written by [`code_point_label`].
pub fn parse_code_point_label(label: &str) -> std::result::Result<char, LabelError> {
    let digits = label
        .strip_prefix("U+")
        .ok_or_else(|| LabelError::MissingPrefix(label.to_string()))?;
    if digits.len() < 4 {
        return Err(LabelError::TooShort(label.to_string()));
    }
    if !digits
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    {
        return Err(LabelError::InvalidHex(label.to_string()));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| LabelError::InvalidHex(label.to_string()))?;
    char::from_u32(value).ok_or(LabelError::NotAScalar(value))
}

/// The glyph list file contents for `text`.
pub fn glyph_list(text: &str) -> String {
    glyph_set(text)
        .into_iter()
        .map(code_point_label)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the glyph list for `text` to `output`, replacing what was there.
pub fn write_glyph_list(output: &Utf8Path, text: &str) -> Result<GlyphReport> {
    let list = glyph_list(text);
    write_string(output, &list)?;

    Ok(GlyphReport {
        output: output.to_path_buf(),
        glyph_count: glyph_set(text).len(),
    })
}

/// Write one subset's glyph list according to `layout`.
pub fn write_subset_glyphs(layout: &AssetLayout, subset: Subset) -> Result<GlyphReport> {
    let report = write_glyph_list(&layout.glyph_list_path(subset), subset.characters())?;
    log::info!("{}: wrote {} glyphs", subset, report.glyph_count);
    Ok(report)
}
