//! Property-based tests for entity name normalization

use entity_enums_sdk::to_identifier;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_output_characters_are_lowercase_alphanumeric_or_underscore(name in "\\PC*") {
        for c in to_identifier(&name).chars() {
            prop_assert!(c == '_' || c.is_alphanumeric(), "unexpected character {:?}", c);
            prop_assert!(c.to_lowercase().eq(std::iter::once(c)), "not lower-cased: {:?}", c);
        }
    }

    #[test]
    fn test_output_never_longer_than_input(name in "\\PC*") {
        prop_assert!(to_identifier(&name).chars().count() <= name.chars().count());
    }

    #[test]
    fn test_normalization_is_deterministic(name in "\\PC*") {
        prop_assert_eq!(to_identifier(&name), to_identifier(&name));
    }

    #[test]
    fn test_renormalizing_without_whitespace_is_stable(name in "[A-Za-z0-9!?#.-]{0,32}") {
        let once = to_identifier(&name);
        prop_assert_eq!(to_identifier(&once), once.clone());
    }

    #[test]
    fn test_whitespace_count_matches_underscores(
        words in prop::collection::vec("[A-Za-z0-9]{1,8}", 1..6)
    ) {
        let name = words.join(" ");
        let identifier = to_identifier(&name);
        prop_assert_eq!(identifier.matches('_').count(), words.len() - 1);
        prop_assert_eq!(identifier, words.join("_").to_lowercase());
    }
}
