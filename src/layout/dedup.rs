use std::collections::HashSet;

use crate::model::ValidatedPhase;

/// Collapse repeated phase ids, keeping the first occurrence in input order.
///
/// Callers may merge overlapping data sources; first-wins keeps the result
/// deterministic instead of letting later, possibly stale duplicates shadow
/// the original.
pub fn dedup_phases(phases: Vec<ValidatedPhase>) -> Vec<ValidatedPhase> {
    let mut seen: HashSet<String> = HashSet::with_capacity(phases.len());
    phases
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
