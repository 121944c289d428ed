//! Threat prediction.
//!
//! Heuristic: the opponent most likely to strike is the one holding the
//! largest garrison.

use crate::core::Base;

/// The hostile base with the highest population.
///
/// Ties go to the first base in input order. `None` for an empty slice.
#[must_use]
pub fn predict_strongest_hostile<'a>(hostile_bases: &[&'a Base]) -> Option<&'a Base> {
    let mut strongest: Option<&'a Base> = None;
    for &candidate in hostile_bases {
        if strongest.map_or(true, |best| candidate.population > best.population) {
            strongest = Some(candidate);
        }
    }
    strongest
}
