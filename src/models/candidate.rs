//! Candidate model.
//!
//! Candidates are the people being placed into roles. Each carries graded
//! skills and an experience proxy (number of past events worked).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SkillLevel;

/// A person available for assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique candidate identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Study or cohort year.
    pub year: i32,
    /// Number of past events worked (experience proxy).
    pub past_events: u32,
    /// Skill name → proficiency.
    pub skills: HashMap<String, SkillLevel>,
}

impl Candidate {
    /// Creates a candidate with no skills and no experience.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            year: 0,
            past_events: 0,
            skills: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the cohort year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the past-event count.
    pub fn with_past_events(mut self, past_events: u32) -> Self {
        self.past_events = past_events;
        self
    }

    /// Sets a skill level. Values above 3 are clipped to expert.
    pub fn with_skill(mut self, name: impl Into<String>, level: u8) -> Self {
        self.skills.insert(name.into(), SkillLevel::from(level));
        self
    }

    /// Proficiency on a skill (`SkillLevel::None` if undeclared).
    pub fn skill_level(&self, name: &str) -> SkillLevel {
        self.skills.get(name).copied().unwrap_or_default()
    }

    /// Whether the candidate declares the skill (at any level, including 0).
    pub fn declares(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Sum of numeric levels over the given skills.
    pub fn skill_total<'a, I>(&self, skills: I) -> u32
    where
        I: IntoIterator<Item = &'a String>,
    {
        skills
            .into_iter()
            .map(|s| u32::from(self.skill_level(s).value()))
            .sum()
    }
}
