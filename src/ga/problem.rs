//! Staffing GA problem definition.
//!
//! Bundles the role catalog, the candidate table and the fitness weights
//! into one value that the initializer, the operators and the runner all
//! borrow. Candidate lookups by ID and the skill schema (every skill name
//! any candidate declares) are computed once here instead of per evaluation.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::fitness::{self, FitnessBreakdown, FitnessWeights};
use super::initializer;
use crate::models::{Assignment, Candidate, Role};

/// GA problem definition for staffing optimization.
///
/// # Example
/// ```
/// use u_staffing::ga::StaffingProblem;
/// use u_staffing::models::{Candidate, Role};
///
/// let roles = vec![Role::new("R1").with_quantity(1).with_skill("Rigging")];
/// let candidates = vec![Candidate::new("P1").with_skill("Rigging", 3)];
/// let problem = StaffingProblem::new(roles, candidates);
///
/// assert!(problem.is_known_skill("Rigging"));
/// assert!(problem.candidate("P1").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct StaffingProblem {
    roles: Vec<Role>,
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
    skill_schema: HashSet<String>,
    weights: FitnessWeights,
}

impl StaffingProblem {
    /// Creates a problem with default fitness weights.
    ///
    /// If two candidates share an ID the first one wins lookups.
    pub fn new(roles: Vec<Role>, candidates: Vec<Candidate>) -> Self {
        let mut index = HashMap::with_capacity(candidates.len());
        let mut skill_schema = HashSet::new();
        for (i, c) in candidates.iter().enumerate() {
            index.entry(c.id.clone()).or_insert(i);
            skill_schema.extend(c.skills.keys().cloned());
        }

        Self {
            roles,
            candidates,
            index,
            skill_schema,
            weights: FitnessWeights::default(),
        }
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Role catalog, in input order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Candidate table, in input order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Fitness weights in use.
    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Looks up a candidate by ID.
    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.index.get(id).map(|&i| &self.candidates[i])
    }

    /// Looks up a role by ID.
    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Whether any candidate declares the skill.
    pub fn is_known_skill(&self, skill: &str) -> bool {
        self.skill_schema.contains(skill)
    }

    /// Whether there is nothing to optimize (no roles or no candidates).
    pub fn is_degenerate(&self) -> bool {
        self.roles.is_empty() || self.candidates.is_empty()
    }

    /// Builds one greedy-randomized individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Assignment {
        initializer::make_individual(self, rng)
    }

    /// Scores an assignment. Higher is better.
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        fitness::evaluate_problem(self, assignment)
    }

    /// Scores an assignment term by term.
    pub fn breakdown(&self, assignment: &Assignment) -> FitnessBreakdown {
        fitness::breakdown(self, assignment)
    }

    /// Per-candidate skill score of `candidate_id` against a role.
    pub fn candidate_skill_score(&self, role: &Role, candidate_id: &str) -> f64 {
        fitness::candidate_skill_score(self, role, self.candidate(candidate_id))
    }
}
