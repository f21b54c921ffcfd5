use log::debug;

use crate::tokenize::{normalize, tokenize};

/// Classification of a single aligned word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordStatus {
    /// The typed word equals the reference word under normalization.
    Match,
    /// A typed word stands in for a nearby reference word.
    Substitution,
    /// A reference word the student never typed.
    Missing,
    /// A typed word with no counterpart in the reference text.
    Extra,
}

/// One aligned position: the reference word, the typed word, and how the
/// two relate.
///
/// Exactly one of `typed`/`original` is empty for `Missing` and `Extra`;
/// both are non-empty for `Match` and `Substitution`. `is_error` is `true`
/// for every status except `Match`; report rendering keys off it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentEntry {
    pub typed: String,
    pub original: String,
    pub status: WordStatus,
    pub is_error: bool,
}

impl AlignmentEntry {
    pub fn matched(original: &str, typed: &str) -> Self {
        Self {
            typed: typed.to_string(),
            original: original.to_string(),
            status: WordStatus::Match,
            is_error: false,
        }
    }

    pub fn substitution(original: &str, typed: &str) -> Self {
        Self {
            typed: typed.to_string(),
            original: original.to_string(),
            status: WordStatus::Substitution,
            is_error: true,
        }
    }

    pub fn missing(original: &str) -> Self {
        Self {
            typed: String::new(),
            original: original.to_string(),
            status: WordStatus::Missing,
            is_error: true,
        }
    }

    pub fn extra(typed: &str) -> Self {
        Self {
            typed: typed.to_string(),
            original: String::new(),
            status: WordStatus::Extra,
            is_error: true,
        }
    }
}

/// Aligns the student's typed text against the reference text word by word.
///
/// Builds a longest-common-subsequence table over the two word sequences,
/// using normalized equality (case-fold plus dash unification) as the match
/// predicate, then backtracks it into a left-to-right sequence of
/// `Match`/`Missing`/`Extra` entries. Every reference word and every typed
/// word is accounted for exactly once across the result.
///
/// When the backtrack hits a tie (`dp[i][j-1] == dp[i-1][j]`), the typed
/// side is consumed first. This decides which of several equally optimal
/// alignments is produced and is a normative rule: changing it would change
/// historical scores.
///
/// # Examples
///
/// ```
/// use typescore::{align, WordStatus};
///
/// let entries = align("the quick fox", "the quick fox");
/// assert!(entries.iter().all(|e| e.status == WordStatus::Match));
/// ```
///
/// # Complexity
/// * Time: O(m * n) over the word counts
/// * Space: O(m * n) for the DP table
pub fn align(original: &str, typed: &str) -> Vec<AlignmentEntry> {
    let original_words = tokenize(original);
    let typed_words = tokenize(typed);
    let m = original_words.len();
    let n = typed_words.len();
    debug!("aligning {} reference words against {} typed words", m, n);

    // Normalize once up front; the DP compares normalized forms but the
    // emitted entries carry the original token text.
    let original_norm: Vec<String> = original_words.iter().map(|w| normalize(w)).collect();
    let typed_norm: Vec<String> = typed_words.iter().map(|w| normalize(w)).collect();

    let dp = lcs_table(&original_norm, &typed_norm);

    // Backtrack from (m, n) to (0, 0), emitting entries right-to-left.
    let mut entries = Vec::with_capacity(m.max(n));
    let mut i = m;
    let mut j = n;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original_norm[i - 1] == typed_norm[j - 1] {
            entries.push(AlignmentEntry::matched(
                original_words[i - 1],
                typed_words[j - 1],
            ));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            entries.push(AlignmentEntry::extra(typed_words[j - 1]));
            j -= 1;
        } else {
            entries.push(AlignmentEntry::missing(original_words[i - 1]));
            i -= 1;
        }
    }

    entries.reverse();
    entries
}

/// Builds the LCS length table for two normalized word sequences.
///
/// `dp[i][j]` is the LCS length of `a[..i]` and `b[..j]`. A fresh table is
/// returned per call; the scorer keeps no state between invocations.
fn lcs_table(a: &[String], b: &[String]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(entries: &[AlignmentEntry]) -> Vec<WordStatus> {
        entries.iter().map(|e| e.status).collect()
    }

    #[test]
    fn test_identity_alignment() {
        let entries = align("the quick brown fox", "the quick brown fox");
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.status == WordStatus::Match));
        assert!(entries.iter().all(|e| !e.is_error));
    }

    #[test]
    fn test_both_empty() {
        assert!(align("", "").is_empty());
        assert!(align("  \t ", "\n").is_empty());
    }

    #[test]
    fn test_empty_typed_is_all_missing() {
        let entries = align("a b c", "");
        assert_eq!(
            statuses(&entries),
            vec![WordStatus::Missing, WordStatus::Missing, WordStatus::Missing]
        );
        assert!(entries.iter().all(|e| e.typed.is_empty()));
    }

    #[test]
    fn test_empty_original_is_all_extra() {
        let entries = align("", "x y");
        assert_eq!(statuses(&entries), vec![WordStatus::Extra, WordStatus::Extra]);
        assert!(entries.iter().all(|e| e.original.is_empty()));
    }

    #[test]
    fn test_dash_variants_match() {
        // hyphen in the reference, en dash in the student's input
        let entries = align("co-operate", "co\u{2013}operate");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, WordStatus::Match);
        // stored text is untouched by normalization
        assert_eq!(entries[0].original, "co-operate");
        assert_eq!(entries[0].typed, "co\u{2013}operate");
    }

    #[test]
    fn test_case_insensitive_match() {
        let entries = align("The Quick", "the quick");
        assert!(entries.iter().all(|e| e.status == WordStatus::Match));
        assert_eq!(entries[0].original, "The");
        assert_eq!(entries[0].typed, "the");
    }

    #[test]
    fn test_truncated_input_has_trailing_missing() {
        let entries = align("the quick brown fox jumps", "the quick brown fox");
        assert_eq!(entries.len(), 5);
        assert!(entries[..4].iter().all(|e| e.status == WordStatus::Match));
        assert_eq!(entries[4].status, WordStatus::Missing);
        assert_eq!(entries[4].original, "jumps");
    }

    #[test]
    fn test_mismatch_produces_missing_then_extra_window() {
        let entries = align("red car is fast", "red bus is fast");
        assert_eq!(
            statuses(&entries),
            vec![
                WordStatus::Match,
                WordStatus::Missing,
                WordStatus::Extra,
                WordStatus::Match,
                WordStatus::Match,
            ]
        );
        assert_eq!(entries[1].original, "car");
        assert_eq!(entries[2].typed, "bus");
    }

    #[test]
    fn test_conservation_of_words() {
        let original = "one two three four five six";
        let typed = "one too three extra five";
        let entries = align(original, typed);

        let original_side = entries
            .iter()
            .filter(|e| !e.original.is_empty())
            .count();
        let typed_side = entries.iter().filter(|e| !e.typed.is_empty()).count();

        assert_eq!(original_side, tokenize(original).len());
        assert_eq!(typed_side, tokenize(typed).len());
    }

    #[test]
    fn test_deterministic() {
        let a = "some reference text with a few words";
        let b = "some reference txt with few wrods";
        assert_eq!(align(a, b), align(a, b));
    }
}
