//! Assignment (solution) model.
//!
//! An assignment maps each role to the ordered list of candidate IDs placed
//! in it. It is the chromosome of the staffing GA: operators clone and edit
//! assignments, and every individual owns its IDs outright, so editing a
//! child never leaks into its parents.
//!
//! The model does not forbid placing a candidate in two roles (or twice in
//! one). Such placements are legal here and penalized by the fitness
//! function instead.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Role;

/// Candidates placed in a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSlot {
    /// Role identifier.
    pub role_id: String,
    /// Assigned candidate IDs, in placement order.
    pub candidate_ids: Vec<String>,
}

/// A complete role → candidates mapping.
///
/// Slots keep insertion order, which is catalog order when the assignment
/// is built with [`Assignment::for_roles`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    slots: Vec<RoleSlot>,
}

impl Assignment {
    /// Creates an empty assignment with no roles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assignment with one empty slot per role, in catalog order.
    pub fn for_roles(roles: &[Role]) -> Self {
        Self {
            slots: roles
                .iter()
                .map(|r| RoleSlot {
                    role_id: r.id.clone(),
                    candidate_ids: Vec::new(),
                })
                .collect(),
        }
    }

    /// Sets the candidates of a role (builder form of [`Assignment::set`]).
    pub fn with_role<I, S>(mut self, role_id: impl Into<String>, candidate_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(role_id, candidate_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the candidates of a role, appending a new slot if the role is absent.
    pub fn set(&mut self, role_id: impl Into<String>, candidate_ids: Vec<String>) {
        let role_id = role_id.into();
        match self.slots.iter_mut().find(|s| s.role_id == role_id) {
            Some(slot) => slot.candidate_ids = candidate_ids,
            None => self.slots.push(RoleSlot {
                role_id,
                candidate_ids,
            }),
        }
    }

    /// Candidates assigned to a role.
    pub fn get(&self, role_id: &str) -> Option<&[String]> {
        self.slots
            .iter()
            .find(|s| s.role_id == role_id)
            .map(|s| s.candidate_ids.as_slice())
    }

    /// Mutable access to a role's candidate list.
    pub fn get_mut(&mut self, role_id: &str) -> Option<&mut Vec<String>> {
        self.slots
            .iter_mut()
            .find(|s| s.role_id == role_id)
            .map(|s| &mut s.candidate_ids)
    }

    /// All slots in order.
    pub fn slots(&self) -> &[RoleSlot] {
        &self.slots
    }

    /// Mutable access to all slots.
    pub fn slots_mut(&mut self) -> &mut [RoleSlot] {
        &mut self.slots
    }

    /// Role IDs in slot order.
    pub fn role_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.role_id.as_str())
    }

    /// Number of role slots.
    pub fn role_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of candidates in a role (0 if the role has no slot).
    pub fn assigned_count(&self, role_id: &str) -> usize {
        self.get(role_id).map_or(0, <[String]>::len)
    }

    /// Total placements across all roles, counting repeats.
    pub fn total_placements(&self) -> usize {
        self.slots.iter().map(|s| s.candidate_ids.len()).sum()
    }

    /// Distinct candidate IDs placed anywhere.
    pub fn distinct_candidates(&self) -> HashSet<&str> {
        self.slots
            .iter()
            .flat_map(|s| s.candidate_ids.iter().map(String::as_str))
            .collect()
    }

    /// Placements beyond the first for each candidate.
    pub fn duplicate_count(&self) -> usize {
        self.total_placements() - self.distinct_candidates().len()
    }

    /// Roles the candidate is placed in, in slot order (repeats included).
    pub fn roles_of(&self, candidate_id: &str) -> Vec<&str> {
        self.slots
            .iter()
            .flat_map(|s| {
                s.candidate_ids
                    .iter()
                    .filter(move |c| c.as_str() == candidate_id)
                    .map(move |_| s.role_id.as_str())
            })
            .collect()
    }

    /// Whether the candidate is placed anywhere.
    pub fn is_assigned(&self, candidate_id: &str) -> bool {
        self.slots
            .iter()
            .any(|s| s.candidate_ids.iter().any(|c| c == candidate_id))
    }
}
