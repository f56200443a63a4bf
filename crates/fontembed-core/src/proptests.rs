use super::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Property: one line per distinct character
proptest! {
    #[test]
    fn prop_line_count_matches_distinct_chars(s in "\\PC*") {
        let list = glyph_list(&s);
        let distinct = s.chars().collect::<BTreeSet<_>>().len();

        let lines = if list.is_empty() { 0 } else { list.split('\n').count() };
        prop_assert_eq!(lines, distinct);
    }
}

// Property: parsing the labels back yields exactly the input's character set
proptest! {
    #[test]
    fn prop_labels_parse_back_to_char_set(s in any::<String>()) {
        let list = glyph_list(&s);
        let parsed: BTreeSet<char> = list
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| parse_code_point_label(line).unwrap())
            .collect();

        prop_assert_eq!(parsed, s.chars().collect::<BTreeSet<_>>());
    }
}

// Property: lines are strictly ascending by code point
proptest! {
    #[test]
    fn prop_lines_strictly_ascending(s in any::<String>()) {
        let list = glyph_list(&s);
        let values: Vec<u32> = list
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| u32::from(parse_code_point_label(line).unwrap()))
            .collect();

        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

// Property: glyph lists do not depend on repetition or order of the input
proptest! {
    #[test]
    fn prop_glyph_list_ignores_repetition(s in "\\PC{0,64}") {
        let doubled = format!("{s}{s}");
        let reversed: String = s.chars().rev().collect();

        prop_assert_eq!(glyph_list(&doubled), glyph_list(&s));
        prop_assert_eq!(glyph_list(&reversed), glyph_list(&s));
    }
}

// Property: data URIs decode to the original bytes
proptest! {
    #[test]
    fn prop_data_uri_recovers_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let uri = encode_data_uri(&bytes);

        prop_assert!(uri.starts_with(DATA_URI_PREFIX));
        prop_assert!(!uri.contains('\n'));
        prop_assert_eq!(decode_data_uri(&uri).unwrap(), bytes);
    }
}
