//! Generational loop for the staffing GA.
//!
//! # States
//!
//! `INIT → EVALUATED → {SELECT_RECOMBINE_MUTATE → EVALUATED}* → DONE`
//!
//! Each generation keeps the top `elitism_count` individuals unchanged and
//! fills the rest with offspring from tournament-selected parents. The
//! generation count is fixed; there is no convergence check. With at least
//! one elite the best fitness never decreases from one generation to the
//! next.
//!
//! The [`Optimizer`] owns its RNG and population, so two optimizers never
//! share state and a seeded run is fully reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::{ConfigError, GaConfig};
use super::operators::GeneticOperators;
use super::population::{self, Individual};
use super::repair::repair_duplicates;
use super::selection::tournament_select;
use super::StaffingProblem;
use crate::models::{Assignment, Candidate, Role};

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Best fitness in the population.
    pub best_fitness: f64,
    /// Mean fitness of the population.
    pub average_fitness: f64,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best assignment found (after repair when enabled).
    pub best: Assignment,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Per-generation statistics, starting with the initial population.
    pub history: Vec<GenerationStats>,
    /// Generations run after initialization.
    pub generations: usize,
    /// Whether the duplicate repair pass changed the best assignment.
    pub repaired: bool,
}

/// Staffing GA driver.
///
/// # Example
/// ```
/// use u_staffing::ga::{GaConfig, Optimizer};
/// use u_staffing::models::{Candidate, Role};
///
/// let roles = vec![
///     Role::new("Host").with_quantity(1).with_skill("Communication"),
///     Role::new("Tech").with_quantity(1).with_skill("AV Setup"),
/// ];
/// let candidates = vec![
///     Candidate::new("P1").with_skill("Communication", 3).with_skill("AV Setup", 0),
///     Candidate::new("P2").with_skill("Communication", 0).with_skill("AV Setup", 3),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
///
/// let mut optimizer = Optimizer::new(roles, candidates, config).unwrap();
/// let result = optimizer.run();
/// assert_eq!(result.best.get("Host").unwrap(), &["P1".to_string()]);
/// assert_eq!(result.best.get("Tech").unwrap(), &["P2".to_string()]);
/// ```
#[derive(Debug)]
pub struct Optimizer {
    problem: StaffingProblem,
    config: GaConfig,
    operators: GeneticOperators,
    rng: StdRng,
    population: Vec<Individual>,
}

impl Optimizer {
    /// Creates an optimizer; fitness weights come from `config.weights`.
    pub fn new(
        roles: Vec<Role>,
        candidates: Vec<Candidate>,
        config: GaConfig,
    ) -> Result<Self, ConfigError> {
        let problem = StaffingProblem::new(roles, candidates).with_weights(config.weights.clone());
        Self::with_problem(problem, config)
    }

    /// Creates an optimizer over a prepared problem, keeping its weights.
    pub fn with_problem(problem: StaffingProblem, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            problem,
            operators: config.operators(),
            config,
            rng,
            population: Vec::new(),
        })
    }

    /// The problem being optimized.
    pub fn problem(&self) -> &StaffingProblem {
        &self.problem
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Current population, sorted best first.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Runs the full search.
    pub fn run(&mut self) -> OptimizationResult {
        self.run_with_progress(|_| {})
    }

    /// Runs the full search, reporting each generation's statistics.
    ///
    /// The callback sees generation 0 (the initial population) first.
    pub fn run_with_progress<F>(&mut self, mut on_progress: F) -> OptimizationResult
    where
        F: FnMut(&GenerationStats),
    {
        if self.problem.is_degenerate() {
            warn!(
                roles = self.problem.roles().len(),
                candidates = self.problem.candidates().len(),
                "Degenerate staffing problem; result will score zero"
            );
        }
        info!(
            roles = self.problem.roles().len(),
            candidates = self.problem.candidates().len(),
            population = self.config.population_size,
            generations = self.config.generations,
            seed = ?self.config.seed,
            "Starting staffing optimization"
        );

        let mut history = Vec::with_capacity(self.config.generations + 1);

        self.initialize();
        let stats = self.stats(0);
        on_progress(&stats);
        history.push(stats);

        for generation in 1..=self.config.generations {
            self.next_generation();
            let stats = self.stats(generation);
            debug!(
                generation,
                best = stats.best_fitness,
                average = stats.average_fitness,
                "Generation evaluated"
            );
            on_progress(&stats);
            history.push(stats);
        }

        let champion = self.population.first().cloned().unwrap_or_else(|| {
            Individual::evaluated(Assignment::for_roles(self.problem.roles()), &self.problem)
        });
        let (best, best_fitness, repaired) = if self.config.strict_repair {
            let fixed = repair_duplicates(&champion.assignment, &self.problem);
            let changed = fixed != champion.assignment;
            let fitness = self.problem.evaluate(&fixed);
            (fixed, fitness, changed)
        } else {
            (champion.assignment, champion.fitness, false)
        };

        info!(
            best_fitness,
            duplicates = best.duplicate_count(),
            repaired,
            "Staffing optimization finished"
        );

        OptimizationResult {
            best,
            best_fitness,
            history,
            generations: self.config.generations,
            repaired,
        }
    }

    fn initialize(&mut self) {
        let seeds: Vec<Assignment> = (0..self.config.population_size)
            .map(|_| self.problem.create_individual(&mut self.rng))
            .collect();
        self.population = self.evaluate(seeds);
    }

    fn next_generation(&mut self) {
        let elite = self.config.elitism_count.min(self.population.len());
        let target = self.config.population_size.saturating_sub(elite);
        let mut offspring: Vec<Assignment> = Vec::with_capacity(target + 1);

        while offspring.len() < target {
            let parents = (
                tournament_select(&self.population, self.config.tournament_size, &mut self.rng),
                tournament_select(&self.population, self.config.tournament_size, &mut self.rng),
            );
            let (Some(p1), Some(p2)) = parents else {
                break;
            };
            let (mut c1, mut c2) = self.operators.crossover(&p1, &p2, &mut self.rng);
            self.operators
                .maybe_mutate(&mut c1, self.problem.roles(), &mut self.rng);
            self.operators
                .maybe_mutate(&mut c2, self.problem.roles(), &mut self.rng);
            offspring.push(c1);
            offspring.push(c2);
        }
        offspring.truncate(target);

        let mut next: Vec<Individual> = self.population[..elite].to_vec();
        next.extend(self.evaluate(offspring));
        self.population = next;
        population::sort_descending(&mut self.population);
    }

    fn evaluate(&self, assignments: Vec<Assignment>) -> Vec<Individual> {
        let mut scored = population::evaluate_all(assignments, &self.problem, self.config.parallel);
        population::sort_descending(&mut scored);
        scored
    }

    fn stats(&self, generation: usize) -> GenerationStats {
        GenerationStats {
            generation,
            best_fitness: self.population.first().map_or(0.0, |i| i.fitness),
            average_fitness: population::average_fitness(&self.population),
        }
    }
}

/// Runs one optimization with a fresh [`Optimizer`].
pub fn optimize(
    roles: Vec<Role>,
    candidates: Vec<Candidate>,
    config: GaConfig,
) -> Result<OptimizationResult, ConfigError> {
    Ok(Optimizer::new(roles, candidates, config)?.run())
}
