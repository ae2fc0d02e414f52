//! Strict-mode duplicate repair.
//!
//! The GA only discourages repeated placements. When a downstream consumer
//! needs every candidate in at most one role, this pass strips the extras
//! after the search: each candidate keeps the placement where its skill
//! score for the role is highest, ties going to the earliest role.

use std::collections::HashMap;

use super::StaffingProblem;
use crate::models::Assignment;

/// Returns a copy of `assignment` with each candidate placed at most once.
///
/// Deterministic. Slot order and the relative order of kept candidates are
/// preserved. Roles outside the catalog score every candidate at zero.
pub fn repair_duplicates(assignment: &Assignment, problem: &StaffingProblem) -> Assignment {
    // candidate → (score, slot index, position) of the best placement so far
    let mut keep: HashMap<&str, (f64, usize, usize)> = HashMap::new();
    for (slot_idx, slot) in assignment.slots().iter().enumerate() {
        let role = problem.role(&slot.role_id);
        for (pos, id) in slot.candidate_ids.iter().enumerate() {
            let score = role.map_or(0.0, |r| problem.candidate_skill_score(r, id));
            keep.entry(id.as_str())
                .and_modify(|best| {
                    if score > best.0 {
                        *best = (score, slot_idx, pos);
                    }
                })
                .or_insert((score, slot_idx, pos));
        }
    }

    let mut repaired = assignment.clone();
    for (slot_idx, slot) in repaired.slots_mut().iter_mut().enumerate() {
        let mut pos = 0;
        slot.candidate_ids.retain(|id| {
            let kept = keep
                .get(id.as_str())
                .is_some_and(|&(_, s, p)| s == slot_idx && p == pos);
            pos += 1;
            kept
        });
    }
    repaired
}
