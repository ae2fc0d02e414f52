//! Assignment report.
//!
//! Flattens a finished assignment into the structure handed to presentation
//! layers: per role, who was placed, their levels on the role's required
//! skills, and whether the headcount was met. Search shortfalls surface here
//! as [`FulfillmentStatus`] values rather than errors.
//!
//! The report keeps the assignment's role and candidate order, so
//! [`AssignmentReport::to_assignment`] reproduces the original mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ga::StaffingProblem;
use crate::models::{Assignment, SkillLevel};

/// Headcount outcome of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    /// Exactly the needed number of candidates.
    Met,
    /// Fewer than needed, by the given count.
    Short(usize),
    /// More than needed, by the given count.
    Over(usize),
}

impl FulfillmentStatus {
    /// Classifies `assigned` against `needed`.
    pub fn of(assigned: usize, needed: usize) -> Self {
        if assigned == needed {
            FulfillmentStatus::Met
        } else if assigned < needed {
            FulfillmentStatus::Short(needed - assigned)
        } else {
            FulfillmentStatus::Over(assigned - needed)
        }
    }

    /// Whether the headcount was met exactly.
    pub fn is_met(self) -> bool {
        self == FulfillmentStatus::Met
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillmentStatus::Met => write!(f, "exactly met"),
            FulfillmentStatus::Short(k) => write!(f, "short by {k}"),
            FulfillmentStatus::Over(k) => write!(f, "over by {k}"),
        }
    }
}

/// One placed candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssigneeReport {
    /// Candidate ID.
    pub candidate_id: String,
    /// Display name (empty for IDs missing from the candidate table).
    pub name: String,
    /// Level on each of the role's required skills.
    pub skill_levels: BTreeMap<String, SkillLevel>,
}

/// One role's staffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleReport {
    /// Role ID.
    pub role_id: String,
    /// Role name (empty for roles missing from the catalog).
    pub role_name: String,
    /// Needed headcount (0 for roles missing from the catalog).
    pub quantity_needed: usize,
    /// Headcount outcome.
    pub status: FulfillmentStatus,
    /// Placed candidates, in assignment order.
    pub assignees: Vec<AssigneeReport>,
}

/// Output of a run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentReport {
    /// Fitness of the reported assignment.
    pub fitness: f64,
    /// Per-role staffing, in assignment order.
    pub roles: Vec<RoleReport>,
    /// Candidates from the table placed in no role, in table order.
    pub unassigned: Vec<String>,
}

impl AssignmentReport {
    /// Builds a report for `assignment`.
    ///
    /// # Example
    /// ```
    /// use u_staffing::ga::StaffingProblem;
    /// use u_staffing::models::{Assignment, Candidate, Role};
    /// use u_staffing::report::{AssignmentReport, FulfillmentStatus};
    ///
    /// let problem = StaffingProblem::new(
    ///     vec![Role::new("R1").with_quantity(2)],
    ///     vec![Candidate::new("P1"), Candidate::new("P2")],
    /// );
    /// let assignment = Assignment::new().with_role("R1", ["P1"]);
    /// let report = AssignmentReport::build(&assignment, &problem);
    ///
    /// assert_eq!(report.roles[0].status, FulfillmentStatus::Short(1));
    /// assert_eq!(report.unassigned, vec!["P2".to_string()]);
    /// ```
    pub fn build(assignment: &Assignment, problem: &StaffingProblem) -> Self {
        let roles = assignment
            .slots()
            .iter()
            .map(|slot| {
                let role = problem.role(&slot.role_id);
                let quantity_needed = role.map_or(0, |r| r.quantity_needed);
                let assignees = slot
                    .candidate_ids
                    .iter()
                    .map(|id| {
                        let candidate = problem.candidate(id);
                        let skill_levels: BTreeMap<String, SkillLevel> = role
                            .map(|r| {
                                r.required_skills
                                    .iter()
                                    .map(|s| {
                                        let level =
                                            candidate.map(|c| c.skill_level(s)).unwrap_or_default();
                                        (s.clone(), level)
                                    })
                                    .collect()
                            })
                            .unwrap_or_default();
                        AssigneeReport {
                            candidate_id: id.clone(),
                            name: candidate.map(|c| c.name.clone()).unwrap_or_default(),
                            skill_levels,
                        }
                    })
                    .collect();

                RoleReport {
                    role_id: slot.role_id.clone(),
                    role_name: role.map(|r| r.name.clone()).unwrap_or_default(),
                    quantity_needed,
                    status: FulfillmentStatus::of(slot.candidate_ids.len(), quantity_needed),
                    assignees,
                }
            })
            .collect();

        let unassigned = problem
            .candidates()
            .iter()
            .filter(|c| !assignment.is_assigned(&c.id))
            .map(|c| c.id.clone())
            .collect();

        Self {
            fitness: problem.evaluate(assignment),
            roles,
            unassigned,
        }
    }

    /// Reconstructs the role → candidate mapping.
    pub fn to_assignment(&self) -> Assignment {
        let mut assignment = Assignment::new();
        for role in &self.roles {
            assignment.set(
                role.role_id.clone(),
                role.assignees.iter().map(|a| a.candidate_id.clone()).collect(),
            );
        }
        assignment
    }

    /// Whether every reported role met its headcount.
    pub fn all_met(&self) -> bool {
        self.roles.iter().all(|r| r.status.is_met())
    }
}
