//! Input validation for staffing problems.
//!
//! Checks structural integrity of the role catalog and candidate table
//! before optimization. Detects:
//! - Duplicate IDs
//! - Roles with a zero headcount
//! - Required skills that no candidate declares
//! - Empty catalogs or pools
//! - Total headcount larger than the candidate pool
//!
//! The optimizer never calls this itself: it degrades gracefully on all of
//! the above. Loaders use it to reject bad input with every issue listed.

use crate::models::{Candidate, Role};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two roles or two candidates share an ID.
    DuplicateId,
    /// A role needs zero candidates.
    ZeroQuantity,
    /// A role requires a skill absent from every candidate.
    UnknownSkill,
    /// The catalog or the pool is empty.
    EmptyInput,
    /// Roles need more candidates than exist.
    InsufficientCandidates,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a staffing problem.
///
/// Checks:
/// 1. Catalog and pool are non-empty
/// 2. No duplicate role IDs
/// 3. No duplicate candidate IDs
/// 4. Every role needs at least one candidate
/// 5. Every required skill is declared by some candidate
/// 6. Total headcount does not exceed the pool
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(roles: &[Role], candidates: &[Candidate]) -> ValidationResult {
    let mut errors = Vec::new();

    if roles.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Role catalog is empty",
        ));
    }
    if candidates.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Candidate pool is empty",
        ));
    }

    let mut role_ids = HashSet::new();
    for role in roles {
        if !role_ids.insert(role.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", role.id),
            ));
        }
        if role.quantity_needed == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuantity,
                format!("Role '{}' needs zero candidates", role.id),
            ));
        }
    }

    let mut candidate_ids = HashSet::new();
    let mut schema: HashSet<&str> = HashSet::new();
    for c in candidates {
        if !candidate_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate candidate ID: {}", c.id),
            ));
        }
        schema.extend(c.skills.keys().map(String::as_str));
    }

    if !candidates.is_empty() {
        for role in roles {
            for skill in &role.required_skills {
                if !schema.contains(skill.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownSkill,
                        format!("Role '{}' requires unknown skill '{}'", role.id, skill),
                    ));
                }
            }
        }
    }

    let headcount: usize = roles.iter().map(|r| r.quantity_needed).sum();
    if !candidates.is_empty() && headcount > candidate_ids.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCandidates,
            format!(
                "Roles need {headcount} candidates but only {} are available",
                candidate_ids.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
