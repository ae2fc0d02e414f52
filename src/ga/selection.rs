//! Tournament selection.
//!
//! # Reference
//! Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//! and the Effects of Noise"

use rand::Rng;

use super::population::Individual;
use crate::models::Assignment;

/// Draws `tournament_size` individuals with replacement and returns a copy
/// of the fittest. The first drawn wins ties.
///
/// Returns `None` only for an empty population. A zero tournament size is
/// treated as one.
pub fn tournament_select<R: Rng>(
    population: &[Individual],
    tournament_size: usize,
    rng: &mut R,
) -> Option<Assignment> {
    if population.is_empty() {
        return None;
    }
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..tournament_size.max(1) {
        let challenger = &population[rng.random_range(0..population.len())];
        if challenger.fitness > best.fitness {
            best = challenger;
        }
    }
    Some(best.assignment.clone())
}
