//! Optimizer configuration.
//!
//! `GaConfig` deserializes from partial documents: every missing field takes
//! its default, so a host can ship `{"generations": 200}` and nothing else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fitness::FitnessWeights;
use super::operators::GeneticOperators;

/// Errors raised when a configuration cannot drive a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("tournament size must be at least 1")]
    EmptyTournament,

    #[error("elitism count {elitism} exceeds population size {population}")]
    ElitismTooLarge { elitism: usize, population: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// Genetic search parameters.
///
/// # Example
/// ```
/// use u_staffing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generations(20)
///     .with_seed(7)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.elitism_count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations after the initial population.
    pub generations: usize,
    /// Top individuals copied unchanged into each new generation.
    pub elitism_count: usize,
    /// Individuals drawn per tournament.
    pub tournament_size: usize,
    /// Probability that a parent pair is recombined.
    pub crossover_rate: f64,
    /// Probability that each child is mutated.
    pub mutation_rate: f64,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Evaluate each generation on the rayon pool.
    pub parallel: bool,
    /// Strip duplicate placements from the final best assignment.
    pub strict_repair: bool,
    /// Fitness constants.
    pub weights: FitnessWeights,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            elitism_count: 5,
            tournament_size: 5,
            crossover_rate: 0.8,
            mutation_rate: 0.15,
            seed: None,
            parallel: true,
            strict_repair: false,
            weights: FitnessWeights::default(),
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the elite count.
    pub fn with_elitism(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables the post-search duplicate repair.
    pub fn with_strict_repair(mut self, strict: bool) -> Self {
        self.strict_repair = strict;
        self
    }

    /// Sets the fitness constants.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if self.elitism_count > self.population_size {
            return Err(ConfigError::ElitismTooLarge {
                elitism: self.elitism_count,
                population: self.population_size,
            });
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }

    /// Operator settings derived from this configuration.
    pub fn operators(&self) -> GeneticOperators {
        GeneticOperators {
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            ..GeneticOperators::default()
        }
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 100);
        assert_eq!(c.generations, 50);
        assert_eq!(c.elitism_count, 5);
        assert_eq!(c.tournament_size, 5);
        assert_eq!(c.crossover_rate, 0.8);
        assert_eq!(c.mutation_rate, 0.15);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            GaConfig::default().with_population_size(0).validate(),
            Err(ConfigError::EmptyPopulation)
        );
        assert_eq!(
            GaConfig::default().with_tournament_size(0).validate(),
            Err(ConfigError::EmptyTournament)
        );
        assert_eq!(
            GaConfig::default().with_population_size(3).validate(),
            Err(ConfigError::ElitismTooLarge {
                elitism: 5,
                population: 3
            })
        );
        assert!(matches!(
            GaConfig::default().with_mutation_rate(1.5).validate(),
            Err(ConfigError::RateOutOfRange { name: "mutation_rate", .. })
        ));
        assert!(GaConfig::default().with_crossover_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::ElitismTooLarge {
            elitism: 8,
            population: 4,
        };
        assert_eq!(err.to_string(), "elitism count 8 exceeds population size 4");
    }

    #[test]
    fn test_partial_document() {
        let c: GaConfig =
            serde_json::from_str(r#"{"generations": 200, "seed": 11, "weights": {"duplicate_penalty": 5000.0}}"#)
                .unwrap();
        assert_eq!(c.generations, 200);
        assert_eq!(c.seed, Some(11));
        assert_eq!(c.population_size, 100);
        assert_eq!(c.weights.duplicate_penalty, 5000.0);
        assert_eq!(c.weights.exact_fill_bonus, 200.0);
    }

    #[test]
    fn test_operators_follow_rates() {
        let ops = GaConfig::default()
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.3)
            .operators();
        assert_eq!(ops.crossover_rate, 0.5);
        assert_eq!(ops.mutation_rate, 0.3);
    }
}
