use thiserror::Error;

/// Convenience alias used by the guarded scoring entry points.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors reported by the scoring pipeline.
///
/// The core alignment and scoring functions are total over arbitrary string
/// input; the only failure mode is the resource guard applied by
/// [`crate::score_typing`] and [`crate::score_shorthand`] before alignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The input text exceeds the maximum word count the scorer accepts.
    #[error("input too large: {words} words exceeds the {limit}-word limit")]
    InputTooLarge { words: usize, limit: usize },
}
