//! Staffing domain models.
//!
//! Provides the input types (roles and candidates) and the solution type
//! (assignment) shared by the fitness function, the genetic operators, and
//! the report builder.
//!
//! # Domain Mappings
//!
//! | u-staffing | Events | Clinics | Projects |
//! |------------|--------|---------|----------|
//! | Role | Crew position | Shift post | Team seat |
//! | Candidate | Volunteer | Nurse | Engineer |
//! | Assignment | Crew roster | Duty roster | Team plan |

mod assignment;
mod candidate;
mod role;
mod skill;

pub use assignment::{Assignment, RoleSlot};
pub use candidate::Candidate;
pub use role::Role;
pub use skill::SkillLevel;
