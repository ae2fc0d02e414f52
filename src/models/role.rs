//! Role model.
//!
//! A role is a position to be staffed: it needs a fixed headcount and a
//! profile of required skills. Roles are immutable inputs to the optimizer.

use serde::{Deserialize, Serialize};

/// A position with a required headcount and skill profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Required skill names, in declaration order, without repeats.
    pub required_skills: Vec<String>,
    /// Number of candidates the role needs.
    pub quantity_needed: usize,
}

impl Role {
    /// Creates a role needing one candidate and no particular skills.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            required_skills: Vec::new(),
            quantity_needed: 1,
        }
    }

    /// Sets the role name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the headcount.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity_needed = quantity;
        self
    }

    /// Adds a required skill. Repeats are ignored.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if !self.required_skills.contains(&skill) {
            self.required_skills.push(skill);
        }
        self
    }

    /// Adds several required skills.
    pub fn with_skills<I, S>(self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        skills.into_iter().fold(self, |role, s| role.with_skill(s))
    }

    /// Whether the role lists any required skill.
    pub fn has_requirements(&self) -> bool {
        !self.required_skills.is_empty()
    }

    /// Whether the role requires the given skill.
    pub fn requires(&self, skill: &str) -> bool {
        self.required_skills.iter().any(|s| s == skill)
    }
}
