// this_file: crates/fontembed-core/src/verify.rs

//! Check that the artifacts on disk are up to date.

use std::fmt;

use camino::Utf8PathBuf;

use crate::data_uri::decode_data_uri;
use crate::error::{DataUriError, Result};
use crate::glyphs::glyph_list;
use crate::layout::{read_bytes, read_string, AssetLayout};
use crate::subset::Subset;

/// One stale or broken artifact
#[derive(Debug)]
pub struct Mismatch {
    pub subset: Subset,
    pub path: Utf8PathBuf,
    pub kind: MismatchKind,
}

#[derive(Debug)]
pub enum MismatchKind {
    /// The data URI decodes, but not to the font's bytes
    DataUriStale,
    /// The data URI file is not a data URI this tool writes
    DataUriInvalid(DataUriError),
    /// The glyph list differs from the one computed from the subset text
    GlyphListStale,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MismatchKind::DataUriStale => write!(
                f,
                "{}: {} does not decode to the current font",
                self.subset, self.path
            ),
            MismatchKind::DataUriInvalid(err) => {
                write!(f, "{}: {}: {}", self.subset, self.path, err)
            }
            MismatchKind::GlyphListStale => write!(
                f,
                "{}: {} differs from the subset's characters",
                self.subset, self.path
            ),
        }
    }
}

/// Compare one subset's data URI and glyph list against their sources.
///
/// Missing or unreadable files are errors; content differences are
/// returned so that every problem can be reported in one run.
pub fn verify_subset(layout: &AssetLayout, subset: Subset) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();

    let font = read_bytes(&layout.font_path(subset))?;
    let uri_path = layout.data_uri_path(subset);
    match decode_data_uri(&read_string(&uri_path)?) {
        Ok(decoded) if decoded == font => {}
        Ok(_) => mismatches.push(Mismatch {
            subset,
            path: uri_path,
            kind: MismatchKind::DataUriStale,
        }),
        Err(err) => mismatches.push(Mismatch {
            subset,
            path: uri_path,
            kind: MismatchKind::DataUriInvalid(err),
        }),
    }

    let list_path = layout.glyph_list_path(subset);
    if read_string(&list_path)? != glyph_list(subset.characters()) {
        mismatches.push(Mismatch {
            subset,
            path: list_path,
            kind: MismatchKind::GlyphListStale,
        });
    }

    if mismatches.is_empty() {
        log::info!("{}: artifacts up to date", subset);
    }
    Ok(mismatches)
}
