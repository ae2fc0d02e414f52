//! Multi-term staffing fitness.
//!
//! # Terms
//!
//! | Term | Scope | Effect |
//! |------|-------|--------|
//! | Fulfillment | per role | +200 exact, -300/missing, -150/extra |
//! | Skill match | per role | mean per-assignee skill score × 0.8 |
//! | Experience | per role | mean past events × 10 × 0.3, plus diversity bonus |
//! | All roles met | global | +500 once |
//! | Workload balance | global | -variance(role sizes) × 5 × 0.2 |
//! | Duplicates | global | -1000 per repeated placement |
//!
//! Higher is better; values may be negative. The function is pure: the same
//! assignment always scores the same float. Missing skills degrade to level
//! zero and are penalized numerically rather than rejected.

use serde::{Deserialize, Serialize};

use super::StaffingProblem;
use crate::models::{Assignment, Candidate, Role};

/// Constants of the fitness function.
///
/// Defaults reproduce the reference tuning. All penalties are stored as
/// positive magnitudes and subtracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    /// Bonus when a role has exactly its headcount.
    pub exact_fill_bonus: f64,
    /// Penalty per missing candidate.
    pub understaffed_penalty: f64,
    /// Penalty per extra candidate.
    pub overstaffed_penalty: f64,
    /// Multiplier on the averaged skill score.
    pub skill_weight: f64,
    /// Points per level for skills at intermediate or above.
    pub proficient_points_per_level: f64,
    /// Points for a beginner-level required skill.
    pub beginner_points: f64,
    /// Penalty for a required skill the candidate lacks.
    pub missing_skill_penalty: f64,
    /// Penalty for a required skill no candidate declares at all.
    pub unknown_skill_penalty: f64,
    /// Bonus for a candidate holding every required skill at level ≥ 1.
    pub full_coverage_bonus: f64,
    /// Points per mean past event before weighting.
    pub experience_scale: f64,
    /// Multiplier on experience and diversity terms.
    pub experience_weight: f64,
    /// Multiplier on past-event variance for the diversity bonus.
    pub diversity_scale: f64,
    /// Cap on the diversity bonus before weighting.
    pub diversity_cap: f64,
    /// Global bonus when every role is exactly met.
    pub all_roles_met_bonus: f64,
    /// Multiplier on role-size variance.
    pub balance_scale: f64,
    /// Multiplier on the scaled balance penalty.
    pub balance_weight: f64,
    /// Penalty per repeated placement.
    pub duplicate_penalty: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            exact_fill_bonus: 200.0,
            understaffed_penalty: 300.0,
            overstaffed_penalty: 150.0,
            skill_weight: 0.8,
            proficient_points_per_level: 30.0,
            beginner_points: 5.0,
            missing_skill_penalty: 40.0,
            unknown_skill_penalty: 20.0,
            full_coverage_bonus: 50.0,
            experience_scale: 10.0,
            experience_weight: 0.3,
            diversity_scale: 2.0,
            diversity_cap: 20.0,
            all_roles_met_bonus: 500.0,
            balance_scale: 5.0,
            balance_weight: 0.2,
            duplicate_penalty: 1000.0,
        }
    }
}

/// Fitness split into its terms.
///
/// Penalty fields hold the amount subtracted (non-negative).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    /// Sum of per-role headcount terms.
    pub fulfillment: f64,
    /// Sum of weighted per-role skill terms.
    pub skill_match: f64,
    /// Sum of weighted per-role experience and diversity terms.
    pub experience: f64,
    /// Global bonus (0 unless every role is exactly met).
    pub all_roles_bonus: f64,
    /// Workload balance penalty.
    pub balance_penalty: f64,
    /// Duplicate placement penalty.
    pub duplicate_penalty: f64,
    /// Final fitness.
    pub total: f64,
}

/// Scores an assignment against a role catalog and candidate table.
///
/// Convenience wrapper that builds a [`StaffingProblem`] with default
/// weights. Prefer [`StaffingProblem::evaluate`] in loops.
///
/// # Example
/// ```
/// use u_staffing::ga::evaluate;
/// use u_staffing::models::{Assignment, Candidate, Role};
///
/// let roles = vec![Role::new("R1").with_quantity(1)];
/// let candidates = vec![Candidate::new("P1")];
/// let filled = Assignment::new().with_role("R1", ["P1"]);
/// let empty = Assignment::new().with_role("R1", Vec::<String>::new());
///
/// assert!(evaluate(&filled, &roles, &candidates) > evaluate(&empty, &roles, &candidates));
/// ```
pub fn evaluate(assignment: &Assignment, roles: &[Role], candidates: &[Candidate]) -> f64 {
    StaffingProblem::new(roles.to_vec(), candidates.to_vec()).evaluate(assignment)
}

pub(crate) fn evaluate_problem(problem: &StaffingProblem, assignment: &Assignment) -> f64 {
    breakdown(problem, assignment).total
}

pub(crate) fn breakdown(problem: &StaffingProblem, assignment: &Assignment) -> FitnessBreakdown {
    if problem.is_degenerate() {
        return FitnessBreakdown::default();
    }

    let w = problem.weights();
    let mut out = FitnessBreakdown::default();
    let mut all_met = true;
    let mut role_sizes = Vec::with_capacity(problem.roles().len());

    for role in problem.roles() {
        let assigned = assignment.get(&role.id).unwrap_or(&[]);
        let a = assigned.len();
        let n = role.quantity_needed;
        role_sizes.push(a as f64);

        if a == n {
            out.fulfillment += w.exact_fill_bonus;
        } else {
            all_met = false;
            if a < n {
                out.fulfillment -= w.understaffed_penalty * (n - a) as f64;
            } else {
                out.fulfillment -= w.overstaffed_penalty * (a - n) as f64;
            }
        }

        if a == 0 {
            continue;
        }

        let members: Vec<Option<&Candidate>> =
            assigned.iter().map(|id| problem.candidate(id)).collect();

        if role.has_requirements() {
            let total: f64 = members
                .iter()
                .map(|c| candidate_skill_score(problem, role, *c))
                .sum();
            out.skill_match += (total / a as f64) * w.skill_weight;
        }

        let events: Vec<f64> = members
            .iter()
            .map(|c| c.map_or(0.0, |c| f64::from(c.past_events)))
            .collect();
        out.experience += mean(&events) * w.experience_scale * w.experience_weight;
        if a > 1 {
            let diversity = (variance(&events) * w.diversity_scale).min(w.diversity_cap);
            out.experience += diversity * w.experience_weight;
        }
    }

    if all_met {
        out.all_roles_bonus = w.all_roles_met_bonus;
    }
    out.balance_penalty = variance(&role_sizes) * w.balance_scale * w.balance_weight;
    out.duplicate_penalty = assignment.duplicate_count() as f64 * w.duplicate_penalty;

    out.total = out.fulfillment + out.skill_match + out.experience + out.all_roles_bonus
        - out.balance_penalty
        - out.duplicate_penalty;
    out
}

/// Unweighted skill score of one assignee for one role.
///
/// An unknown candidate scores as if it declared no skills.
pub(crate) fn candidate_skill_score(
    problem: &StaffingProblem,
    role: &Role,
    candidate: Option<&Candidate>,
) -> f64 {
    let w = problem.weights();
    let mut score = 0.0;
    let mut covers_all = true;

    for skill in &role.required_skills {
        if !problem.is_known_skill(skill) {
            score -= w.unknown_skill_penalty;
            covers_all = false;
            continue;
        }
        let level = candidate.map(|c| c.skill_level(skill)).unwrap_or_default();
        match level.value() {
            0 => {
                score -= w.missing_skill_penalty;
                covers_all = false;
            }
            1 => score += w.beginner_points,
            v => score += w.proficient_points_per_level * f64::from(v),
        }
    }

    if covers_all && role.has_requirements() {
        score += w.full_coverage_bonus;
    }
    score
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`).
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}
