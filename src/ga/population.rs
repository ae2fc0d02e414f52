//! Scored individuals and population bookkeeping.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::StaffingProblem;
use crate::models::Assignment;

/// An assignment paired with its fitness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The chromosome.
    pub assignment: Assignment,
    /// Fitness (higher = better).
    pub fitness: f64,
}

impl Individual {
    /// Scores an assignment.
    pub fn evaluated(assignment: Assignment, problem: &StaffingProblem) -> Self {
        let fitness = problem.evaluate(&assignment);
        Self {
            assignment,
            fitness,
        }
    }
}

/// Scores every assignment, preserving input order.
///
/// With `parallel` set the work runs on the rayon pool; results are
/// identical to the sequential path because evaluation is pure.
pub fn evaluate_all(
    assignments: Vec<Assignment>,
    problem: &StaffingProblem,
    parallel: bool,
) -> Vec<Individual> {
    if parallel {
        assignments
            .into_par_iter()
            .map(|a| Individual::evaluated(a, problem))
            .collect()
    } else {
        assignments
            .into_iter()
            .map(|a| Individual::evaluated(a, problem))
            .collect()
    }
}

/// Sorts descending by fitness. Stable, so ties keep insertion order.
pub fn sort_descending(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
}

/// Mean fitness (0 for an empty population).
pub fn average_fitness(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|i| i.fitness).sum::<f64>() / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Role};

    fn scored(tag: &str, fitness: f64) -> Individual {
        Individual {
            assignment: Assignment::new().with_role(tag, Vec::<String>::new()),
            fitness,
        }
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut pop = vec![scored("a", 1.0), scored("b", 3.0), scored("c", 1.0), scored("d", 3.0)];
        sort_descending(&mut pop);
        let order: Vec<&str> = pop
            .iter()
            .map(|i| i.assignment.role_ids().next().unwrap())
            .collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = StaffingProblem::new(
            vec![Role::new("R1").with_quantity(2)],
            vec![
                Candidate::new("P1").with_past_events(3),
                Candidate::new("P2").with_past_events(1),
            ],
        );
        let batch: Vec<Assignment> = vec![
            Assignment::new().with_role("R1", ["P1"]),
            Assignment::new().with_role("R1", ["P1", "P2"]),
            Assignment::new().with_role("R1", ["P2", "P2", "P1"]),
        ];
        let seq = evaluate_all(batch.clone(), &problem, false);
        let par = evaluate_all(batch, &problem, true);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_average() {
        assert_eq!(average_fitness(&[]), 0.0);
        assert_eq!(average_fitness(&[scored("a", 2.0), scored("b", -4.0)]), -1.0);
    }
}
