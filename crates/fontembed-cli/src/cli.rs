// this_file: crates/fontembed-cli/src/cli.rs

//! CLI argument definitions using Clap v4

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fontembed_core::Subset;

/// fontembed - Prepare subset fonts for embedding in SVG graphics
///
/// Without a subcommand, runs `all`.
#[derive(Parser, Debug)]
#[command(name = "fontembed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory that contains the `output/` folder
    #[arg(long = "base-dir", global = true, default_value = ".")]
    pub base_dir: Utf8PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Silent mode (no per-subset summary)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode subset fonts as single-line data URI text files
    #[command(alias = "e")]
    Encode(SelectArgs),

    /// Write the sorted code point list of each subset
    #[command(alias = "g")]
    Glyphs(SelectArgs),

    /// Encode fonts, then write glyph lists
    All,

    /// Check data URIs and glyph lists against their sources
    Verify(SelectArgs),

    /// Print an @font-face rule for embedding in an SVG <style> block
    Css(CssArgs),
}

/// Restrict a command to a single subset
#[derive(Args, Debug, Default)]
pub struct SelectArgs {
    /// Only process this subset
    #[arg(short = 's', long = "subset")]
    pub subset: Option<SubsetArg>,
}

impl SelectArgs {
    pub fn subsets(&self) -> Vec<Subset> {
        match self.subset {
            Some(subset) => vec![subset.into()],
            None => Subset::ALL.to_vec(),
        }
    }
}

/// Arguments for the css command
#[derive(Args, Debug)]
pub struct CssArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// CSS font family (defaults to the file stem without "-Subset")
    #[arg(short = 'f', long = "family")]
    pub family: Option<String>,
}

/// Subsets selectable on the command line, by file stem or short name
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SubsetArg {
    #[value(name = "FiraCode-Regular-Subset", alias = "regular")]
    FiraCodeRegular,
    #[value(name = "FiraCode-Medium-Subset", alias = "medium")]
    FiraCodeMedium,
    #[value(name = "Inter-Medium-Subset", alias = "inter-medium")]
    InterMedium,
}

impl From<SubsetArg> for Subset {
    fn from(arg: SubsetArg) -> Self {
        match arg {
            SubsetArg::FiraCodeRegular => Subset::FiraCodeRegular,
            SubsetArg::FiraCodeMedium => Subset::FiraCodeMedium,
            SubsetArg::InterMedium => Subset::InterMedium,
        }
    }
}
