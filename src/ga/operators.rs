//! Crossover and mutation for staffing assignments.
//!
//! # Crossover
//!
//! Role-wise uniform crossover: every role's whole candidate list is
//! inherited from one parent or the other on a fair coin, then each child is
//! deduplicated so a candidate keeps only its first placement.
//!
//! # Mutation
//!
//! | Operator | Effect |
//! |----------|--------|
//! | Reassign | Move one candidate from a non-empty role to another role |
//! | Swap | Exchange one candidate between two non-empty roles |
//! | RemoveAdd | Take one candidate from the first overstaffed role and give it to an understaffed one (or drop it) |
//!
//! None of the operators check capacity. Transient over- and understaffing
//! is corrected by fitness pressure.
//!
//! # Usage
//!
//! ```
//! use u_staffing::ga::operators::{GeneticOperators, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_rate, 0.8);
//! assert_eq!(ops.mutation_types.len(), 3);
//! assert!(ops.mutation_types.contains(&MutationType::RemoveAdd));
//! ```

use std::collections::HashSet;

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::models::{Assignment, Role};

/// Mutation strategy for staffing assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    /// Move one candidate to a different role.
    Reassign,
    /// Exchange one candidate between two roles.
    Swap,
    /// Relieve the first overstaffed role.
    RemoveAdd,
}

impl MutationType {
    /// All mutation strategies.
    pub const ALL: [MutationType; 3] = [
        MutationType::Reassign,
        MutationType::Swap,
        MutationType::RemoveAdd,
    ];
}

/// Rates and strategy pool for the staffing GA.
#[derive(Debug, Clone)]
pub struct GeneticOperators {
    /// Probability that a parent pair is recombined.
    pub crossover_rate: f64,
    /// Probability that each child is mutated.
    pub mutation_rate: f64,
    /// Strategies drawn uniformly on each mutation.
    pub mutation_types: Vec<MutationType>,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            mutation_rate: 0.15,
            mutation_types: MutationType::ALL.to_vec(),
        }
    }
}

impl GeneticOperators {
    /// Recombines two parents at the configured rate.
    pub fn crossover<R: Rng>(
        &self,
        p1: &Assignment,
        p2: &Assignment,
        rng: &mut R,
    ) -> (Assignment, Assignment) {
        crossover(p1, p2, self.crossover_rate, rng)
    }

    /// Applies one randomly chosen mutation strategy.
    pub fn mutate<R: Rng>(&self, individual: &mut Assignment, roles: &[Role], rng: &mut R) {
        let Some(&kind) = self.mutation_types.choose(rng) else {
            return;
        };
        match kind {
            MutationType::Reassign => reassign_mutation(individual, rng),
            MutationType::Swap => swap_mutation(individual, rng),
            MutationType::RemoveAdd => remove_add_mutation(individual, roles, rng),
        }
    }

    /// Mutates with probability `mutation_rate`. Returns whether it fired.
    pub fn maybe_mutate<R: Rng>(
        &self,
        individual: &mut Assignment,
        roles: &[Role],
        rng: &mut R,
    ) -> bool {
        if rng.random_bool(self.mutation_rate.clamp(0.0, 1.0)) {
            self.mutate(individual, roles, rng);
            true
        } else {
            false
        }
    }
}

// ======================== Crossover ========================

/// Role-wise crossover.
///
/// With probability `rate`, each role's list goes to child 1 from parent 1
/// and to child 2 from parent 2 on heads, swapped on tails; both children are
/// then deduplicated. Otherwise the parents are returned as copies.
pub fn crossover<R: Rng>(
    p1: &Assignment,
    p2: &Assignment,
    rate: f64,
    rng: &mut R,
) -> (Assignment, Assignment) {
    if !rng.random_bool(rate.clamp(0.0, 1.0)) {
        return (p1.clone(), p2.clone());
    }

    let mut role_ids: Vec<&str> = p1.role_ids().collect();
    for id in p2.role_ids() {
        if !role_ids.contains(&id) {
            role_ids.push(id);
        }
    }

    let mut c1 = Assignment::new();
    let mut c2 = Assignment::new();
    for role_id in role_ids {
        let from1 = p1.get(role_id).unwrap_or(&[]).to_vec();
        let from2 = p2.get(role_id).unwrap_or(&[]).to_vec();
        if rng.random_bool(0.5) {
            c1.set(role_id, from1);
            c2.set(role_id, from2);
        } else {
            c1.set(role_id, from2);
            c2.set(role_id, from1);
        }
    }

    dedup_placements(&mut c1);
    dedup_placements(&mut c2);
    (c1, c2)
}

/// Drops every placement of a candidate after its first, scanning roles in
/// slot order.
pub fn dedup_placements(assignment: &mut Assignment) {
    let mut seen: HashSet<String> = HashSet::new();
    for slot in assignment.slots_mut() {
        slot.candidate_ids.retain(|id| seen.insert(id.clone()));
    }
}

// ======================== Mutation ========================

/// Moves one random candidate from a random non-empty role to a different
/// random role.
pub fn reassign_mutation<R: Rng>(individual: &mut Assignment, rng: &mut R) {
    let role_count = individual.role_count();
    let non_empty = non_empty_slots(individual);
    let Some(&from) = non_empty.choose(rng) else {
        return;
    };
    if role_count < 2 {
        return;
    }

    let mut to = rng.random_range(0..role_count - 1);
    if to >= from {
        to += 1;
    }

    let slots = individual.slots_mut();
    let list = &mut slots[from].candidate_ids;
    let moved = list.remove(rng.random_range(0..list.len()));
    slots[to].candidate_ids.push(moved);
}

/// Exchanges one random candidate between two distinct non-empty roles.
pub fn swap_mutation<R: Rng>(individual: &mut Assignment, rng: &mut R) {
    let non_empty = non_empty_slots(individual);
    if non_empty.len() < 2 {
        return;
    }
    let i = rng.random_range(0..non_empty.len());
    let mut j = rng.random_range(0..non_empty.len() - 1);
    if j >= i {
        j += 1;
    }
    let (a, b) = (non_empty[i], non_empty[j]);

    let slots = individual.slots_mut();
    let from_a = {
        let list = &mut slots[a].candidate_ids;
        list.remove(rng.random_range(0..list.len()))
    };
    let from_b = {
        let list = &mut slots[b].candidate_ids;
        list.remove(rng.random_range(0..list.len()))
    };
    slots[a].candidate_ids.push(from_b);
    slots[b].candidate_ids.push(from_a);
}

/// Takes one random candidate from the first overstaffed role (catalog
/// order) and places it into a random understaffed role. If no role is
/// understaffed the candidate is dropped from the assignment.
pub fn remove_add_mutation<R: Rng>(individual: &mut Assignment, roles: &[Role], rng: &mut R) {
    let Some(over) = roles
        .iter()
        .find(|r| individual.assigned_count(&r.id) > r.quantity_needed)
    else {
        return;
    };

    let removed = match individual.get_mut(&over.id) {
        Some(list) if !list.is_empty() => list.remove(rng.random_range(0..list.len())),
        _ => return,
    };

    let under: Vec<&Role> = roles
        .iter()
        .filter(|r| individual.assigned_count(&r.id) < r.quantity_needed)
        .collect();
    let Some(target) = under.choose(rng) else {
        return;
    };
    match individual.get_mut(&target.id) {
        Some(list) => list.push(removed),
        None => individual.set(target.id.clone(), vec![removed]),
    }
}

fn non_empty_slots(individual: &Assignment) -> Vec<usize> {
    individual
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.candidate_ids.is_empty())
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn parent_a() -> Assignment {
        Assignment::new()
            .with_role("R1", ["P1", "P2"])
            .with_role("R2", ["P3"])
            .with_role("R3", ["P4"])
    }

    fn parent_b() -> Assignment {
        Assignment::new()
            .with_role("R1", ["P3", "P5"])
            .with_role("R2", ["P1"])
            .with_role("R3", ["P2", "P6"])
    }

    fn sorted_ids(a: &Assignment) -> Vec<String> {
        let mut ids: Vec<String> = a
            .slots()
            .iter()
            .flat_map(|s| s.candidate_ids.iter().cloned())
            .collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_default_operators() {
        let ops = GeneticOperators::default();
        assert_eq!(ops.crossover_rate, 0.8);
        assert_eq!(ops.mutation_rate, 0.15);
        assert_eq!(ops.mutation_types, MutationType::ALL.to_vec());
    }

    #[test]
    fn test_crossover_rate_zero_copies_parents() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (c1, c2) = crossover(&parent_a(), &parent_b(), 0.0, &mut rng);
        assert_eq!(c1, parent_a());
        assert_eq!(c2, parent_b());
    }

    #[test]
    fn test_crossover_children_are_duplicate_free() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let (c1, c2) = crossover(&parent_a(), &parent_b(), 1.0, &mut rng);
            assert_eq!(c1.duplicate_count(), 0);
            assert_eq!(c2.duplicate_count(), 0);
            assert_eq!(c1.role_ids().collect::<Vec<_>>(), vec!["R1", "R2", "R3"]);
        }
    }

    #[test]
    fn test_crossover_inherits_whole_role_lists() {
        let p1 = Assignment::new().with_role("R1", ["A", "B"]).with_role("R2", ["C"]);
        let p2 = Assignment::new().with_role("R1", ["D"]).with_role("R2", ["E", "F"]);
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..20 {
            let (c1, c2) = crossover(&p1, &p2, 1.0, &mut rng);
            for role in ["R1", "R2"] {
                let got1 = c1.get(role).unwrap();
                let got2 = c2.get(role).unwrap();
                let a = p1.get(role).unwrap();
                let b = p2.get(role).unwrap();
                assert!((got1 == a && got2 == b) || (got1 == b && got2 == a));
            }
        }
    }

    #[test]
    fn test_crossover_mixes_roles() {
        let p1 = Assignment::new()
            .with_role("R1", ["A"])
            .with_role("R2", ["B"])
            .with_role("R3", ["C"]);
        let p2 = Assignment::new()
            .with_role("R1", ["D"])
            .with_role("R2", ["E"])
            .with_role("R3", ["F"]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mixed = (0..30).any(|_| {
            let (c1, _) = crossover(&p1, &p2, 1.0, &mut rng);
            c1 != p1 && c1 != p2
        });
        assert!(mixed);
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let mut a = Assignment::new()
            .with_role("R1", ["P1", "P2", "P1"])
            .with_role("R2", ["P2", "P3"]);
        dedup_placements(&mut a);
        assert_eq!(a.get("R1").unwrap(), &["P1".to_string(), "P2".to_string()]);
        assert_eq!(a.get("R2").unwrap(), &["P3".to_string()]);
    }

    #[test]
    fn test_reassign_moves_one_candidate() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let before = parent_a();
            let mut after = before.clone();
            reassign_mutation(&mut after, &mut rng);
            assert_eq!(sorted_ids(&before), sorted_ids(&after));
            assert_ne!(before, after);
        }
    }

    #[test]
    fn test_reassign_needs_two_roles() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut single = Assignment::new().with_role("R1", ["P1"]);
        reassign_mutation(&mut single, &mut rng);
        assert_eq!(single, Assignment::new().with_role("R1", ["P1"]));

        let mut empty = Assignment::new()
            .with_role("R1", Vec::<String>::new())
            .with_role("R2", Vec::<String>::new());
        reassign_mutation(&mut empty, &mut rng);
        assert_eq!(empty.total_placements(), 0);
    }

    #[test]
    fn test_swap_preserves_sizes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let before = parent_a();
        let mut after = before.clone();
        swap_mutation(&mut after, &mut rng);

        assert_eq!(sorted_ids(&before), sorted_ids(&after));
        for role in ["R1", "R2", "R3"] {
            assert_eq!(before.assigned_count(role), after.assigned_count(role));
        }
        assert_ne!(before, after);
    }

    #[test]
    fn test_swap_needs_two_non_empty_roles() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original = Assignment::new()
            .with_role("R1", ["P1", "P2"])
            .with_role("R2", Vec::<String>::new());
        let mut a = original.clone();
        swap_mutation(&mut a, &mut rng);
        assert_eq!(a, original);
    }

    #[test]
    fn test_remove_add_moves_to_understaffed() {
        let roles = vec![
            Role::new("R1").with_quantity(1),
            Role::new("R2").with_quantity(2),
        ];
        let mut a = Assignment::new()
            .with_role("R1", ["P1", "P2"])
            .with_role("R2", ["P3"]);
        let mut rng = SmallRng::seed_from_u64(42);
        remove_add_mutation(&mut a, &roles, &mut rng);

        assert_eq!(a.assigned_count("R1"), 1);
        assert_eq!(a.assigned_count("R2"), 2);
        assert_eq!(a.total_placements(), 3);
    }

    #[test]
    fn test_remove_add_drops_when_nothing_understaffed() {
        let roles = vec![
            Role::new("R1").with_quantity(1),
            Role::new("R2").with_quantity(1),
        ];
        let mut a = Assignment::new()
            .with_role("R1", ["P1", "P2"])
            .with_role("R2", ["P3"]);
        let mut rng = SmallRng::seed_from_u64(42);
        remove_add_mutation(&mut a, &roles, &mut rng);

        assert_eq!(a.assigned_count("R1"), 1);
        assert_eq!(a.assigned_count("R2"), 1);
        assert_eq!(a.total_placements(), 2);
    }

    #[test]
    fn test_remove_add_noop_without_overstaffing() {
        let roles = vec![Role::new("R1").with_quantity(2)];
        let original = Assignment::new().with_role("R1", ["P1"]);
        let mut a = original.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        remove_add_mutation(&mut a, &roles, &mut rng);
        assert_eq!(a, original);
    }

    #[test]
    fn test_remove_add_targets_first_overstaffed() {
        let roles = vec![
            Role::new("R1").with_quantity(1),
            Role::new("R2").with_quantity(1),
            Role::new("R3").with_quantity(3),
        ];
        let mut a = Assignment::new()
            .with_role("R1", ["P1"])
            .with_role("R2", ["P2", "P3"])
            .with_role("R3", ["P4", "P5", "P6", "P7"]);
        let mut rng = SmallRng::seed_from_u64(5);
        remove_add_mutation(&mut a, &roles, &mut rng);

        assert_eq!(a.assigned_count("R2"), 1);
        assert_eq!(a.assigned_count("R3"), 4);
        assert_eq!(a.total_placements(), 6);
    }

    #[test]
    fn test_maybe_mutate_respects_rate() {
        let roles = vec![Role::new("R1"), Role::new("R2"), Role::new("R3")];
        let mut rng = SmallRng::seed_from_u64(42);
        let never = GeneticOperators {
            mutation_rate: 0.0,
            ..GeneticOperators::default()
        };
        let mut a = parent_a();
        assert!(!never.maybe_mutate(&mut a, &roles, &mut rng));
        assert_eq!(a, parent_a());

        let always = GeneticOperators {
            mutation_rate: 1.0,
            mutation_types: vec![MutationType::Swap],
            ..GeneticOperators::default()
        };
        assert!(always.maybe_mutate(&mut a, &roles, &mut rng));
        assert_eq!(sorted_ids(&a), sorted_ids(&parent_a()));
    }
}
