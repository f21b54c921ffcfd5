use log::trace;

use crate::align::{AlignmentEntry, WordStatus};

/// Maximum index distance at which a `Missing` and an `Extra` entry are
/// considered the same word typed wrongly. Grading policy constant; changing
/// it would silently change historical scores.
pub const PAIRING_WINDOW: usize = 3;

/// Merges nearby `Missing`/`Extra` pairs in a raw alignment into
/// `Substitution` entries.
///
/// Raw LCS output renders a word-for-word typo as one `Missing` plus one
/// unrelated `Extra`. This pass reclassifies such neighbors as a single
/// `Substitution` so scoring and rendering reflect "wrong word" rather than
/// "one word added, one word dropped".
///
/// The matching is greedy, not globally optimal, and deliberately so:
/// `Missing` entries are visited in left-to-right order, each takes the
/// not-yet-paired `Extra` with the smallest index distance within
/// [`PAIRING_WINDOW`], and equidistant candidates resolve to the first one
/// seen. The paired `Extra` slot is dropped; relative order of everything
/// else is preserved.
///
/// # Examples
///
/// ```
/// use typescore::{align, pair_substitutions, WordStatus};
///
/// let entries = pair_substitutions(align("red car is fast", "red bus is fast"));
/// assert_eq!(entries.len(), 4);
/// assert_eq!(entries[1].status, WordStatus::Substitution);
/// assert_eq!(entries[1].original, "car");
/// assert_eq!(entries[1].typed, "bus");
/// ```
pub fn pair_substitutions(mut entries: Vec<AlignmentEntry>) -> Vec<AlignmentEntry> {
    let extra_positions: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.status == WordStatus::Extra)
        .map(|(idx, _)| idx)
        .collect();
    let missing_positions: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.status == WordStatus::Missing)
        .map(|(idx, _)| idx)
        .collect();

    let mut paired = vec![false; extra_positions.len()];
    let mut consumed = vec![false; entries.len()];

    for &missing_idx in &missing_positions {
        // Closest remaining extra within the window; strict `<` keeps the
        // first candidate seen on equal distance.
        let mut best: Option<(usize, usize)> = None;
        for (slot, &extra_idx) in extra_positions.iter().enumerate() {
            if paired[slot] {
                continue;
            }
            let distance = extra_idx.abs_diff(missing_idx);
            if distance <= PAIRING_WINDOW && best.map_or(true, |(_, d)| distance < d) {
                best = Some((slot, distance));
            }
        }

        if let Some((slot, distance)) = best {
            paired[slot] = true;
            let extra_idx = extra_positions[slot];
            trace!(
                "pairing missing {:?} at {} with extra {:?} at {} (distance {})",
                entries[missing_idx].original,
                missing_idx,
                entries[extra_idx].typed,
                extra_idx,
                distance
            );
            let typed = entries[extra_idx].typed.clone();
            let original = entries[missing_idx].original.clone();
            entries[missing_idx] = AlignmentEntry::substitution(&original, &typed);
            consumed[extra_idx] = true;
        }
    }

    entries
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| !consumed[*idx])
        .map(|(_, e)| e)
        .collect()
}
