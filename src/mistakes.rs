use crate::align::{AlignmentEntry, WordStatus};

/// Length of the attempted portion of an alignment.
///
/// The attempted portion is the prefix ending at the last entry the student
/// actually typed; trailing `Missing` entries beyond it belong to text the
/// student never reached and are excluded from scoring. Returns `0` when no
/// entry has typed text.
pub fn attempted_len(entries: &[AlignmentEntry]) -> usize {
    entries
        .iter()
        .rposition(|e| !e.typed.is_empty())
        .map_or(0, |idx| idx + 1)
}

/// Counts `Missing` entries in a slice of the alignment.
///
/// Callers pass the attempted prefix to get the scored missing-word count,
/// or the full alignment when displaying everything the student left out.
pub fn missing_in(entries: &[AlignmentEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.status == WordStatus::Missing)
        .count()
}

/// Accumulates the fractional mistake count over the attempted portion of
/// `entries` and returns it together with that attempted prefix.
///
/// Per-entry rules:
/// * `Missing`: +1, or +1.25 when the reference word carries a trailing
///   comma (missing a word that was followed by punctuation is penalized
///   harder).
/// * `Extra`: +1.
/// * `Substitution`: strip `.` and `,` from both sides and case-fold. If the
///   stripped forms differ it is a real word error, +1. If they are equal
///   the difference was pure punctuation: +0.25 when exactly one side has a
///   trailing comma, plus +1 when exactly one side has a trailing period.
///   Both checks are independent and can fire on the same entry.
/// * `Match`: +0.
///
/// The result is always a non-negative multiple of 0.25, which `f64`
/// represents exactly.
pub fn score_mistakes(entries: &[AlignmentEntry]) -> (f64, &[AlignmentEntry]) {
    let attempted = &entries[..attempted_len(entries)];

    let mut mistakes = 0.0;
    for entry in attempted {
        match entry.status {
            WordStatus::Match => {}
            WordStatus::Extra => mistakes += 1.0,
            WordStatus::Missing => {
                mistakes += if entry.original.ends_with(',') { 1.25 } else { 1.0 };
            }
            WordStatus::Substitution => {
                if strip_punctuation(&entry.typed) != strip_punctuation(&entry.original) {
                    mistakes += 1.0;
                } else {
                    if entry.typed.ends_with(',') != entry.original.ends_with(',') {
                        mistakes += 0.25;
                    }
                    if entry.typed.ends_with('.') != entry.original.ends_with('.') {
                        mistakes += 1.0;
                    }
                }
            }
        }
    }

    (mistakes, attempted)
}

/// Removes periods and commas and case-folds, for the "same word, different
/// punctuation" test on substitutions.
fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect::<String>()
        .to_lowercase()
}
