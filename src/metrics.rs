use std::fmt;

use crate::align::align;
use crate::error::{Result, ScoreError};
use crate::mistakes::{missing_in, score_mistakes};
use crate::pairing::pair_substitutions;
use crate::tokenize::tokenize;

/// Maximum word count either input may have before the guarded entry points
/// refuse to score. Bounds the O(m * n) table; the pure functions below do
/// not check it themselves.
pub const MAX_WORDS: usize = 50_000;

/// Scoring result for a typing test.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypingMetrics {
    /// Number of words the student typed.
    pub words: usize,
    /// Fractional mistake count over the attempted portion.
    pub mistakes: f64,
    /// Raw words per minute, ignoring mistakes.
    pub gross_speed: f64,
    /// Words per minute after the mistake penalty, clamped at zero.
    pub net_speed: f64,
    /// Backspace keystrokes captured by the input widget.
    pub backspaces: u32,
    /// Missing words within the attempted portion only.
    pub missing_words: usize,
}

/// Scoring result for a shorthand/dictation test.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShorthandMetrics {
    pub words: usize,
    pub mistakes: f64,
    pub result: ShorthandResult,
    pub missing_words: usize,
}

/// Pass/fail verdict for a shorthand test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShorthandResult {
    Pass,
    Fail,
}

impl ShorthandResult {
    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }
}

impl fmt::Display for ShorthandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Scores a typing test: alignment, mistakes, then speed metrics.
///
/// Gross speed is `words / minutes`. While mistakes stay at or below one per
/// minute, net speed equals gross speed; beyond that a compounding penalty
/// of `(mistakes - minutes) * minutes` words is deducted before dividing.
/// Net speed never goes below zero, and both speeds are zero when `minutes`
/// is not positive. `missing_words` counts only the attempted portion, so a
/// student who ran out of time is not charged for text never reached.
pub fn typing_metrics(
    original: &str,
    typed: &str,
    minutes: f64,
    backspaces: u32,
) -> TypingMetrics {
    let entries = pair_substitutions(align(original, typed));
    let (mistakes, attempted) = score_mistakes(&entries);

    let words = tokenize(typed).len();
    let word_count = words as f64;

    let gross_speed = if minutes > 0.0 { word_count / minutes } else { 0.0 };
    let net_speed = if minutes > 0.0 {
        let raw = if mistakes > minutes {
            let penalty = (mistakes - minutes) * minutes;
            (word_count - penalty) / minutes
        } else {
            word_count / minutes
        };
        raw.max(0.0)
    } else {
        0.0
    };

    TypingMetrics {
        words,
        mistakes,
        gross_speed,
        net_speed,
        backspaces,
        missing_words: missing_in(attempted),
    }
}

/// Scores a shorthand test: the verdict is `Pass` when the mistake
/// percentage over the words actually typed is at most 5% (boundary
/// inclusive). The allotted minutes do not enter the formula; the parameter
/// is kept so both test kinds share a call shape.
pub fn shorthand_metrics(original: &str, typed: &str, _minutes: f64) -> ShorthandMetrics {
    let entries = pair_substitutions(align(original, typed));
    let (mistakes, attempted) = score_mistakes(&entries);

    let words = tokenize(typed).len();
    let mistake_percentage = if words > 0 {
        (mistakes / words as f64) * 100.0
    } else {
        0.0
    };
    let result = if mistake_percentage <= 5.0 {
        ShorthandResult::Pass
    } else {
        ShorthandResult::Fail
    };

    ShorthandMetrics {
        words,
        mistakes,
        result,
        missing_words: missing_in(attempted),
    }
}

/// Size-guarded wrapper around [`typing_metrics`].
///
/// # Errors
///
/// Returns [`ScoreError::InputTooLarge`] when either text exceeds
/// [`MAX_WORDS`] words.
pub fn score_typing(
    original: &str,
    typed: &str,
    minutes: f64,
    backspaces: u32,
) -> Result<TypingMetrics> {
    check_size(original)?;
    check_size(typed)?;
    Ok(typing_metrics(original, typed, minutes, backspaces))
}

/// Size-guarded wrapper around [`shorthand_metrics`].
///
/// # Errors
///
/// Returns [`ScoreError::InputTooLarge`] when either text exceeds
/// [`MAX_WORDS`] words.
pub fn score_shorthand(original: &str, typed: &str, minutes: f64) -> Result<ShorthandMetrics> {
    check_size(original)?;
    check_size(typed)?;
    Ok(shorthand_metrics(original, typed, minutes))
}

fn check_size(text: &str) -> Result<()> {
    let words = tokenize(text).len();
    if words > MAX_WORDS {
        return Err(ScoreError::InputTooLarge {
            words,
            limit: MAX_WORDS,
        });
    }
    Ok(())
}

/// Formats a speed for display: at most two decimal places, and whole
/// numbers drop the fractional part entirely. Display rule only; callers
/// keep the full-precision value for storage.
///
/// # Examples
///
/// ```
/// use typescore::format_speed;
///
/// assert_eq!(format_speed(40.0), "40");
/// assert_eq!(format_speed(32.456), "32.46");
/// assert_eq!(format_speed(32.5), "32.5");
/// ```
pub fn format_speed(speed: f64) -> String {
    let rounded = (speed * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
