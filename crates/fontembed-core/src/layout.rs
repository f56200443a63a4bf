// this_file: crates/fontembed-core/src/layout.rs

//! Where inputs are read from and outputs are written to.
//!
//! Every artifact lives in one `output/` directory under a base directory.
//! The base directory defaults to the current working directory, so the
//! default layout reads and writes `output/<file>` relative to it.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{FontEmbedError, Result};
use crate::subset::Subset;

/// Directory, relative to the base, that holds inputs and outputs
pub const OUTPUT_DIR: &str = "output";

/// Resolves the fixed file names of each subset against a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    output_dir: Utf8PathBuf,
}

impl AssetLayout {
    pub fn new(base_dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            output_dir: base_dir.as_ref().join(OUTPUT_DIR),
        }
    }

    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Subsetted font produced by the external subsetting tool
    pub fn font_path(&self, subset: Subset) -> Utf8PathBuf {
        self.output_dir.join(subset.font_file_name())
    }

    /// Single-line data URI text file
    pub fn data_uri_path(&self, subset: Subset) -> Utf8PathBuf {
        self.output_dir.join(subset.data_uri_file_name())
    }

    /// `U+XXXX` glyph list text file
    pub fn glyph_list_path(&self, subset: Subset) -> Utf8PathBuf {
        self.output_dir.join(subset.glyph_file_name())
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Read a whole file, tagging failures with the path
pub(crate) fn read_bytes(path: &Utf8Path) -> Result<Vec<u8>> {
    log::debug!("Reading {}", path);
    std::fs::read(path).map_err(|source| FontEmbedError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_string(path: &Utf8Path) -> Result<String> {
    log::debug!("Reading {}", path);
    std::fs::read_to_string(path).map_err(|source| FontEmbedError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate `path` and write `contents` to it
pub(crate) fn write_string(path: &Utf8Path, contents: &str) -> Result<()> {
    log::debug!("Writing {} bytes to {}", contents.len(), path);
    std::fs::write(path, contents).map_err(|source| FontEmbedError::Write {
        path: path.to_path_buf(),
        source,
    })
}
