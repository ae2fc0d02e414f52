//! GA-based staffing optimization.
//!
//! Searches role → candidate assignments with a generational genetic
//! algorithm: greedy-randomized seeding, tournament selection, role-wise
//! crossover, repair-oriented mutation, and elitism.
//!
//! # Encoding
//!
//! The chromosome is an [`Assignment`](crate::models::Assignment): one
//! ordered candidate list per role, in catalog order. Placing a candidate in
//! two roles is representable and penalized by [`fitness`], not forbidden.
//!
//! # Submodules
//!
//! - [`fitness`]: Multi-term scoring and its per-term breakdown
//! - [`operators`]: Crossover and mutation strategies
//! - [`repair`]: Optional post-search duplicate removal
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

mod config;
pub mod fitness;
mod initializer;
pub mod operators;
mod population;
mod problem;
pub mod repair;
mod runner;
mod selection;

pub use config::{ConfigError, GaConfig};
pub use fitness::{FitnessBreakdown, FitnessWeights, evaluate};
pub use initializer::make_individual;
pub use population::Individual;
pub use problem::StaffingProblem;
pub use runner::{GenerationStats, OptimizationResult, Optimizer, optimize};
pub use selection::tournament_select;
