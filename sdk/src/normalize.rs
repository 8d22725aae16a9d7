//! Entity name to enum member conversion

use unicode_general_category::{GeneralCategory, get_general_category};

/// Convert an entity name into an enum member identifier.
///
/// Alphanumeric characters are lower-cased and kept, whitespace becomes `_`,
/// and every other character is dropped. Consecutive underscores are not
/// collapsed and a leading digit is left in place.
pub fn to_identifier(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len());
    for c in name.chars() {
        if is_name_alphanumeric(c) {
            // 'İ' lower-cases to 'i' plus a combining dot; keep only the letter
            identifier.extend(c.to_lowercase().filter(|&l| is_name_alphanumeric(l)));
        } else if is_name_whitespace(c) {
            identifier.push('_');
        }
    }
    identifier
}

/// Letters (L*) and numbers (N*).
///
/// Narrower than `char::is_alphanumeric`, which also accepts combining vowel
/// signs such as U+0947 through the Other_Alphabetic property.
fn is_name_alphanumeric(c: char) -> bool {
    c.is_numeric()
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// White_Space plus the ASCII information separators U+001C..=U+001F
fn is_name_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whether the identifier would be rejected by C-family identifier grammars
pub fn starts_with_digit(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(|c| c.is_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_replaces_spaces() {
        assert_eq!(to_identifier("Main Character"), "main_character");
        assert_eq!(to_identifier("Cave Troll"), "cave_troll");
    }

    #[test]
    fn test_drops_punctuation() {
        assert_eq!(to_identifier("NPC-Guard"), "npcguard");
        assert_eq!(to_identifier("Boss #1"), "boss_1");
        assert_eq!(to_identifier("A!"), "a");
        assert_eq!(to_identifier("snake_case"), "snakecase");
    }

    #[test]
    fn test_keeps_every_whitespace_character() {
        assert_eq!(to_identifier("  Giant   Rat "), "__giant___rat_");
        assert_eq!(to_identifier("Tab\tSeparated\nName"), "tab_separated_name");
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(to_identifier("Élan Vital"), "élan_vital");
        assert_eq!(to_identifier("İblis"), "iblis");
        assert_eq!(to_identifier("Ωmega"), "ωmega");
    }

    #[test]
    fn test_information_separators_become_underscores() {
        assert_eq!(to_identifier("a\u{1f}b"), "a_b");
        assert_eq!(to_identifier("a\u{1c}\u{1d}\u{1e}b"), "a___b");
    }

    #[test]
    fn test_combining_marks_are_dropped() {
        assert_eq!(to_identifier("नमस्ते"), "नमसत");
        assert_eq!(to_identifier("Cafe\u{301} Noir"), "cafe_noir");
    }

    #[test]
    fn test_numbers_of_every_kind_are_kept() {
        assert_eq!(to_identifier("Level ²"), "level_²");
        assert_eq!(to_identifier("Ⅻ Legion"), "ⅻ_legion");
        assert_eq!(to_identifier("Unit ٣"), "unit_٣");
    }

    #[test]
    fn test_empty_and_symbol_only_names() {
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("!?#"), "");
    }

    #[test]
    fn test_starts_with_digit() {
        assert!(starts_with_digit("1st_guard"));
        assert!(!starts_with_digit("guard_1"));
        assert!(!starts_with_digit(""));
        assert!(!starts_with_digit("_1"));
    }
}
