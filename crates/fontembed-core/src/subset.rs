// this_file: crates/fontembed-core/src/subset.rs

//! The three font subsets embedded in the SVG graphics.
//!
//! Each subset pairs a font file stem with the text it has to be able to
//! render. The stem names both the `.woff2` input and the `.txt` data-URI
//! output; the glyph list file name is fixed per subset.

use std::fmt;

/// Box-drawing frame, units and transport labels set in Fira Code Regular.
const REGULAR_CHARACTERS: &str = "┌─╥┐│ 0.km║└╨┘080▮.192►fromkHzkbps[:/]━PLAY123456789";

/// Place names and captions set in Fira Code Medium.
const MEDIUM_CHARACTERS: &str = concat!(
    "daymileagelocation0123456789new york city san francisco",
    " seoul huntington beach westminister milan luštica bay shanghai paris r",
    "eykjavík selfoss scotts valley redwood city jeju kagoshima denver7dwork",
    "loadbytebeatgonnaflynowrocky",
);

/// The arithmetic caption set in Inter Medium.
const INTER_MEDIUM_CHARACTERS: &str = "1000 × ⁵⁄₉ = 555 — 36×11";

/// A font subset with a fixed character set and fixed file names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subset {
    FiraCodeRegular,
    FiraCodeMedium,
    InterMedium,
}

impl Subset {
    /// Every subset, in processing order
    pub const ALL: [Subset; 3] = [
        Subset::FiraCodeRegular,
        Subset::FiraCodeMedium,
        Subset::InterMedium,
    ];

    /// File stem shared by the `.woff2` input and the data-URI output
    pub fn stem(self) -> &'static str {
        match self {
            Self::FiraCodeRegular => "FiraCode-Regular-Subset",
            Self::FiraCodeMedium => "FiraCode-Medium-Subset",
            Self::InterMedium => "Inter-Medium-Subset",
        }
    }

    /// Name of the glyph list file written for this subset
    pub fn glyph_file_name(self) -> &'static str {
        match self {
            Self::FiraCodeRegular => "regular-glyphs.txt",
            Self::FiraCodeMedium => "medium-glyphs.txt",
            Self::InterMedium => "inter-medium-glyphs.txt",
        }
    }

    /// All text this subset must be able to render
    pub fn characters(self) -> &'static str {
        match self {
            Self::FiraCodeRegular => REGULAR_CHARACTERS,
            Self::FiraCodeMedium => MEDIUM_CHARACTERS,
            Self::InterMedium => INTER_MEDIUM_CHARACTERS,
        }
    }

    /// Default CSS font family: the stem without its `-Subset` suffix
    pub fn family(self) -> &'static str {
        let stem = self.stem();
        stem.strip_suffix("-Subset").unwrap_or(stem)
    }

    pub fn font_file_name(self) -> String {
        format!("{}.woff2", self.stem())
    }

    pub fn data_uri_file_name(self) -> String {
        format!("{}.txt", self.stem())
    }

    /// Look a subset up by its file stem
    pub fn from_stem(stem: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subset| subset.stem() == stem)
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_when_stem_known_then_match_output_layout() {
        assert_eq!(
            Subset::FiraCodeRegular.font_file_name(),
            "FiraCode-Regular-Subset.woff2"
        );
        assert_eq!(
            Subset::FiraCodeMedium.data_uri_file_name(),
            "FiraCode-Medium-Subset.txt"
        );
        assert_eq!(
            Subset::InterMedium.glyph_file_name(),
            "inter-medium-glyphs.txt"
        );
    }

    #[test]
    fn test_from_stem_when_round_tripped_then_returns_same_subset() {
        for subset in Subset::ALL {
            assert_eq!(Subset::from_stem(subset.stem()), Some(subset));
        }
        assert_eq!(Subset::from_stem("Inter-Regular-Subset"), None);
    }

    #[test]
    fn test_family_when_stem_has_suffix_then_suffix_removed() {
        assert_eq!(Subset::FiraCodeRegular.family(), "FiraCode-Regular");
        assert_eq!(Subset::InterMedium.family(), "Inter-Medium");
    }

    #[test]
    fn test_medium_characters_when_concatenated_then_pieces_join_without_gaps() {
        let text = Subset::FiraCodeMedium.characters();
        assert!(text.contains("paris reykjavík"));
        assert!(text.contains("denver7dworkloadbytebeat"));
        assert_eq!(text.chars().count(), 225);
    }
}
