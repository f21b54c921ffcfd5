/// Splits `text` into words on runs of whitespace.
///
/// Leading and trailing whitespace is ignored and empty fragments are
/// dropped, so whitespace-only input yields an empty vector. Order is
/// significant and words are not deduplicated.
///
/// # Examples
///
/// ```
/// use typescore::tokenize;
///
/// assert_eq!(tokenize("  the quick  brown "), vec!["the", "quick", "brown"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Normalizes a word for equality comparison during alignment.
///
/// All dash-like code points are mapped to the ASCII hyphen and the result
/// is lowercased. Normalization feeds only the match predicate; the original
/// word text is what gets stored, displayed, and scored. Punctuation other
/// than dashes is left untouched because the mistake scorer needs it.
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| if is_dash_variant(c) { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Dash-like code points that students' input methods commonly produce in
/// place of the ASCII hyphen: hyphen/dash block U+2010..U+2015, minus sign,
/// two-em and three-em dashes, and the small/fullwidth presentation forms.
fn is_dash_variant(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2015}'
            | '\u{2212}'
            | '\u{2E3A}'
            | '\u{2E3B}'
            | '\u{FE58}'
            | '\u{FE63}'
            | '\u{FF0D}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("a b c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("  a\t b \n c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation() {
        assert_eq!(tokenize("end. quickly,"), vec!["end.", "quickly,"]);
    }

    #[test]
    fn test_normalize_case_folds() {
        assert_eq!(normalize("Hello"), "hello");
        assert_eq!(normalize("WORLD,"), "world,");
    }

    #[test]
    fn test_normalize_dash_variants() {
        // hyphen, en dash, em dash, minus sign, fullwidth hyphen-minus
        assert_eq!(normalize("co\u{2010}op"), "co-op");
        assert_eq!(normalize("co\u{2013}op"), "co-op");
        assert_eq!(normalize("co\u{2014}op"), "co-op");
        assert_eq!(normalize("co\u{2212}op"), "co-op");
        assert_eq!(normalize("co\u{FF0D}op"), "co-op");
        // ASCII hyphen is already canonical
        assert_eq!(normalize("co-op"), "co-op");
    }

    #[test]
    fn test_normalize_leaves_other_punctuation() {
        assert_eq!(normalize("End."), "end.");
        assert_eq!(normalize("yes,"), "yes,");
    }
}
