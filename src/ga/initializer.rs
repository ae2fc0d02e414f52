//! Greedy-randomized population seeding.
//!
//! # Algorithm
//!
//! 1. Shuffle the candidate list once.
//! 2. For each role in catalog order, rank the still-unassigned candidates
//!    by the sum of their levels over the role's required skills and take
//!    the top `quantity_needed` (the shuffle breaks ties).
//! 3. Place every leftover candidate into a random role whose size is still
//!    at most its headcount; leave it out if no such role exists.
//!
//! Each call reshuffles, so repeated calls with one RNG yield distinct
//! individuals.

use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;

use super::StaffingProblem;
use crate::models::Assignment;

/// Builds one individual.
pub fn make_individual<R: Rng>(problem: &StaffingProblem, rng: &mut R) -> Assignment {
    let roles = problem.roles();
    let mut assignment = Assignment::for_roles(roles);

    let mut pool: Vec<&str> = problem.candidates().iter().map(|c| c.id.as_str()).collect();
    pool.shuffle(rng);

    for role in roles {
        let mut ranked: Vec<(u32, &str)> = pool
            .iter()
            .map(|&id| {
                let score = problem
                    .candidate(id)
                    .map_or(0, |c| c.skill_total(&role.required_skills));
                (score, id)
            })
            .collect();
        // Stable: equal scores keep shuffled order.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let picked: Vec<String> = ranked
            .iter()
            .take(role.quantity_needed)
            .map(|&(_, id)| id.to_string())
            .collect();
        pool.retain(|id| !picked.iter().any(|p| p == id));
        assignment.set(role.id.clone(), picked);
    }

    for id in pool {
        let open: Vec<&str> = roles
            .iter()
            .filter(|r| assignment.assigned_count(&r.id) <= r.quantity_needed)
            .map(|r| r.id.as_str())
            .collect();
        let Some(&role_id) = open.choose(rng) else {
            continue;
        };
        if let Some(list) = assignment.get_mut(role_id) {
            list.push(id.to_string());
        }
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Role};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sample_problem() -> StaffingProblem {
        StaffingProblem::new(
            vec![
                Role::new("Host").with_quantity(1).with_skill("Communication"),
                Role::new("Tech").with_quantity(2).with_skill("AV Setup"),
            ],
            vec![
                Candidate::new("P1").with_skill("Communication", 3).with_skill("AV Setup", 0),
                Candidate::new("P2").with_skill("Communication", 0).with_skill("AV Setup", 3),
                Candidate::new("P3").with_skill("Communication", 1).with_skill("AV Setup", 2),
                Candidate::new("P4").with_skill("Communication", 0).with_skill("AV Setup", 0),
            ],
        )
    }

    #[test]
    fn test_primary_picks_follow_skill() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let a = make_individual(&problem, &mut rng);

        let host = a.get("Host").unwrap();
        let tech = a.get("Tech").unwrap();
        assert_eq!(host[0], "P1");
        assert_eq!(&tech[..2], &["P2".to_string(), "P3".to_string()]);
    }

    #[test]
    fn test_leftover_goes_to_role_with_slack() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(7);
        let a = make_individual(&problem, &mut rng);

        // P4 is left after primary picks; both roles are exactly full, so
        // it lands in one of them as a single extra.
        assert!(a.is_assigned("P4"));
        assert_eq!(a.total_placements(), 4);
        assert_eq!(a.duplicate_count(), 0);
    }

    #[test]
    fn test_short_pool_fills_what_it_can() {
        let problem = StaffingProblem::new(
            vec![Role::new("R1").with_quantity(3), Role::new("R2").with_quantity(2)],
            vec![Candidate::new("P1"), Candidate::new("P2")],
        );
        let mut rng = SmallRng::seed_from_u64(1);
        let a = make_individual(&problem, &mut rng);

        assert_eq!(a.assigned_count("R1"), 2);
        assert_eq!(a.assigned_count("R2"), 0);
        assert_eq!(a.role_count(), 2);
    }

    #[test]
    fn test_leftover_without_slack_stays_out() {
        let problem = StaffingProblem::new(
            vec![Role::new("R1").with_quantity(1)],
            vec![Candidate::new("P1"), Candidate::new("P2"), Candidate::new("P3")],
        );
        let mut rng = SmallRng::seed_from_u64(3);
        let a = make_individual(&problem, &mut rng);

        // One primary pick, one leftover absorbed as an extra, one dropped.
        assert_eq!(a.assigned_count("R1"), 2);
        assert_eq!(a.duplicate_count(), 0);
    }

    #[test]
    fn test_individuals_differ() {
        let problem = StaffingProblem::new(
            vec![Role::new("R1").with_quantity(2), Role::new("R2").with_quantity(2)],
            (1..=8).map(|i| Candidate::new(format!("P{i}"))).collect(),
        );
        let mut rng = SmallRng::seed_from_u64(42);
        let first = make_individual(&problem, &mut rng);
        let differs = (0..20).any(|_| make_individual(&problem, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_empty_inputs() {
        let mut rng = SmallRng::seed_from_u64(0);
        let a = make_individual(&StaffingProblem::new(vec![], vec![]), &mut rng);
        assert_eq!(a.role_count(), 0);

        let b = make_individual(
            &StaffingProblem::new(vec![Role::new("R1")], vec![]),
            &mut rng,
        );
        assert_eq!(b.assigned_count("R1"), 0);
    }
}
