use super::*;
use proptest::prelude::*;

// Every valid matcher name parses to the matching variant
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_valid_matcher_parsing(matcher in prop::sample::select(vec!["fuzzy", "ordered"])) {
        let toml_content = format!(r#"
[search]
matcher = "{}"
"#, matcher);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse valid matcher: {}", matcher);

        let expected = match matcher {
            "fuzzy" => MatcherKind::Fuzzy,
            "ordered" => MatcherKind::Ordered,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.unwrap().search.matcher, expected);
    }

    #[test]
    fn prop_index_flags_round_trip(
        include_root in prop::bool::ANY,
        array_counts in prop::bool::ANY,
        array_indices in prop::bool::ANY
    ) {
        let toml_content = format!(r#"
[index]
include_root = {}
array_counts = {}
array_indices = {}
"#, include_root, array_counts, array_indices);

        let config: Config = toml::from_str(&toml_content).unwrap();
        let options = config.index.to_options();
        prop_assert_eq!(options.include_root, include_root);
        prop_assert_eq!(options.array_counts, array_counts);
        prop_assert_eq!(options.array_indices, array_indices);
        prop_assert_eq!(options.max_depth, None);
    }
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.index.include_root);
    assert!(!config.index.array_counts);
    assert!(!config.index.array_indices);
    assert_eq!(config.search.matcher, MatcherKind::Fuzzy);
    assert!(config.preview.highlight);
}

#[test]
fn test_partial_section_fills_missing_fields() {
    let config: Config = toml::from_str("[index]\narray_counts = true\n").unwrap();
    assert!(config.index.include_root);
    assert!(config.index.array_counts);
    assert!(!config.index.array_indices);
}

#[test]
fn test_disable_highlight() {
    let config: Config = toml::from_str("[preview]\nhighlight = false\n").unwrap();
    assert!(!config.preview.highlight);
}

#[test]
fn test_invalid_matcher_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[search]\nmatcher = \"regex\"\n");
    assert!(result.is_err());
}

#[test]
fn test_default_index_config_matches_default_options() {
    assert_eq!(IndexConfig::default().to_options(), IndexOptions::default());
}

#[test]
fn test_unknown_sections_are_ignored() {
    let config: Config = toml::from_str("[theme]\nname = \"galaxy\"\n").unwrap();
    assert_eq!(config.search.matcher, MatcherKind::Fuzzy);
}
