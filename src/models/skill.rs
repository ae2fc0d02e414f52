//! Graded skill levels.
//!
//! Candidates declare proficiency on a four-step scale. Anything above the
//! top step is clipped to `Expert`; a skill a candidate does not declare
//! reads as `None`.

use serde::{Deserialize, Serialize};

/// Proficiency on a named skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SkillLevel {
    /// No proficiency (level 0).
    #[default]
    None,
    /// Level 1.
    Beginner,
    /// Level 2.
    Intermediate,
    /// Level 3.
    Expert,
}

impl SkillLevel {
    /// Numeric level in `0..=3`.
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            SkillLevel::None => 0,
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Expert => 3,
        }
    }

    /// Whether the level counts as possessing the skill (level ≥ 1).
    #[inline]
    pub fn is_present(self) -> bool {
        self != SkillLevel::None
    }
}

impl From<u8> for SkillLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => SkillLevel::None,
            1 => SkillLevel::Beginner,
            2 => SkillLevel::Intermediate,
            _ => SkillLevel::Expert,
        }
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.value()
    }
}
