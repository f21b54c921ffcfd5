//! Word-level alignment and scoring for typed transcription tests.
//!
//! Given the reference text a student was supposed to reproduce and the text
//! they actually typed, the crate aligns the two word sequences with an
//! LCS-based diff, pairs nearby mismatches into substitutions, accumulates a
//! punctuation-aware fractional mistake count over the portion the student
//! actually attempted, and derives typing speeds or a shorthand pass/fail
//! verdict. Every function is pure: no I/O, no shared state, deterministic
//! output for identical input.

pub mod align;
pub mod error;
pub mod metrics;
pub mod mistakes;
pub mod pairing;
pub mod tokenize;

pub use align::{align, AlignmentEntry, WordStatus};
pub use error::{Result, ScoreError};
pub use metrics::{
    format_speed, score_shorthand, score_typing, shorthand_metrics, typing_metrics,
    ShorthandMetrics, ShorthandResult, TypingMetrics, MAX_WORDS,
};
pub use mistakes::{attempted_len, missing_in, score_mistakes};
pub use pairing::{pair_substitutions, PAIRING_WINDOW};
pub use tokenize::{normalize, tokenize};
