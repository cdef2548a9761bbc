use unicode_general_category::{get_general_category, GeneralCategory};

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of word characters at least two characters
/// long. Punctuation, whitespace, combining marks and symbols such as `–`,
/// `/` or `#` separate tokens.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| s.chars().nth(1).is_some())
        .map(str::to_string)
        .collect()
}

/// Letters, numbers and `_`. Combining marks such as Arabic harakat are
/// not word characters.
#[inline]
fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_';
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_single_chars() {
        assert_eq!(
            tokenize("SIEM and a Python_3 course #12"),
            vec!["siem", "and", "python_3", "course", "12"]
        );
    }

    #[test]
    fn test_arabic_tokens() {
        assert_eq!(
            tokenize("جرائم معلوماتية، OSINT (استخبارات المصادر المفتوحة)"),
            vec!["جرائم", "معلوماتية", "osint", "استخبارات", "المصادر", "المفتوحة"]
        );
    }

    #[test]
    fn test_combining_marks_split_tokens() {
        // shadda (U+0651) is a nonspacing mark
        assert_eq!(tokenize("متدرّب"), vec!["متدر"]);
        assert_eq!(tokenize("مُحَقِّق"), Vec::<String>::new());
        assert_eq!(tokenize("محقق"), vec!["محقق"]);
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            tokenize("النيابة العامة – وحدة/SOC,IRT"),
            vec!["النيابة", "العامة", "وحدة", "soc", "irt"]
        );
        assert!(tokenize("  - , . ").is_empty());
    }
}
