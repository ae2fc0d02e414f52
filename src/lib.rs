//! Skill-aware staffing optimization for the U-Engine ecosystem.
//!
//! Assigns candidates to roles so that headcounts are met, required skills
//! are covered, experience is mixed, and nobody is placed twice. The search
//! is a genetic algorithm driven by a hand-tuned multi-term fitness.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Role`, `Candidate`, `SkillLevel`, `Assignment`
//! - **`ga`**: Fitness, genetic operators, and the `Optimizer` driver
//! - **`report`**: Per-role fulfillment report for presentation layers
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown skills, headcount)
//!
//! # Example
//!
//! ```
//! use u_staffing::ga::{optimize, GaConfig, StaffingProblem};
//! use u_staffing::models::{Candidate, Role};
//! use u_staffing::report::AssignmentReport;
//!
//! let roles = vec![Role::new("Usher").with_quantity(2).with_skill("Communication")];
//! let candidates = vec![
//!     Candidate::new("P1").with_skill("Communication", 3),
//!     Candidate::new("P2").with_skill("Communication", 2),
//! ];
//! let config = GaConfig::default().with_population_size(10).with_generations(5).with_seed(1);
//!
//! let result = optimize(roles.clone(), candidates.clone(), config).unwrap();
//! let report = AssignmentReport::build(&result.best, &StaffingProblem::new(roles, candidates));
//! assert!(report.all_met());
//! ```
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem. It
//! carries its own GA loop because the chromosome (a variable-length list
//! per role) and the repair-oriented operators do not fit a fixed-length
//! genome. Loading inputs and rendering reports belong to the host.
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod ga;
pub mod models;
pub mod report;
pub mod validation;
