//! Pareto dominance with constraint-violation precedence.
//!
//! The comparison runs in two stages. Constraint violation decides first: a
//! feasible solution dominates an infeasible one, and between two infeasible
//! solutions the smaller violation dominates. Only when neither rule applies
//! are the objective vectors swept (minimization): a solution dominates when
//! it is no worse on every objective and strictly better on at least one.
//!
//! O(number of objectives) per call, no side effects.

use crate::error::{Error, Result};
use crate::solution::Solution;

/// Outcome of a dominance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first solution dominates the second.
    First,
    /// The second solution dominates the first.
    Second,
    /// Neither dominates the other.
    Neither,
}

/// Compares two evaluated solutions for Pareto dominance.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if either solution is unevaluated or the
/// objective vectors differ in length. Both indicate a bug in the calling
/// code: solutions must pass through `Problem::evaluate` before any
/// dominance reasoning.
pub fn compare(a: &Solution, b: &Solution) -> Result<Dominance> {
    if !a.is_evaluated() || !b.is_evaluated() {
        return Err(Error::InvalidState(
            "dominance comparison requires evaluated solutions".into(),
        ));
    }
    if a.objectives().len() != b.objectives().len() {
        return Err(Error::InvalidState(format!(
            "objective vectors differ in length: {} vs {}",
            a.objectives().len(),
            b.objectives().len()
        )));
    }

    let va = a.constraint_violation();
    let vb = b.constraint_violation();
    if va != vb {
        if va == 0.0 {
            return Ok(Dominance::First);
        }
        if vb == 0.0 {
            return Ok(Dominance::Second);
        }
        return Ok(if va < vb {
            Dominance::First
        } else {
            Dominance::Second
        });
    }

    Ok(objective_sweep(a.objectives(), b.objectives()))
}

/// Strict Pareto sweep over equal-length objective vectors.
fn objective_sweep(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better = false;
    let mut b_better = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better = true;
        } else if vb < va {
            b_better = true;
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::First,
        (false, true) => Dominance::Second,
        _ => Dominance::Neither,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn evaluated(objectives: Vec<f64>) -> Solution {
        let mut s = Solution::new(vec![0.0]);
        s.set_objectives(objectives);
        s
    }

    fn infeasible(objectives: Vec<f64>, violation: f64) -> Solution {
        let mut s = evaluated(objectives);
        s.set_constraint_violation(violation);
        s
    }

    // ---- Objective sweep ----

    #[test]
    fn test_clear_dominance() {
        let a = evaluated(vec![1.0, 1.0]);
        let b = evaluated(vec![2.0, 2.0]);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::First);
        assert_eq!(compare(&b, &a).unwrap(), Dominance::Second);
    }

    #[test]
    fn test_weak_dominance_one_objective_equal() {
        let a = evaluated(vec![1.0, 3.0]);
        let b = evaluated(vec![1.0, 4.0]);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::First);
    }

    #[test]
    fn test_trade_off_is_nondominated() {
        let a = evaluated(vec![1.0, 5.0]);
        let b = evaluated(vec![5.0, 1.0]);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::Neither);
    }

    #[test]
    fn test_identical_objectives_nondominated() {
        let a = evaluated(vec![2.0, 2.0]);
        let b = evaluated(vec![2.0, 2.0]);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::Neither);
    }

    // ---- Constraint precedence ----

    #[test]
    fn test_feasible_dominates_infeasible() {
        // Worse on every objective, but feasible.
        let a = evaluated(vec![100.0, 100.0]);
        let b = infeasible(vec![1.0, 1.0], 3.0);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::First);
        assert_eq!(compare(&b, &a).unwrap(), Dominance::Second);
    }

    #[test]
    fn test_smaller_violation_dominates() {
        let a = infeasible(vec![5.0, 5.0], 1.0);
        let b = infeasible(vec![1.0, 1.0], 2.0);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::First);
    }

    #[test]
    fn test_equal_violation_falls_through_to_objectives() {
        let a = infeasible(vec![1.0, 1.0], 2.0);
        let b = infeasible(vec![2.0, 2.0], 2.0);
        assert_eq!(compare(&a, &b).unwrap(), Dominance::First);
    }

    // ---- Preconditions ----

    #[test]
    fn test_unevaluated_is_error() {
        let a = Solution::new(vec![0.0]);
        let b = evaluated(vec![1.0]);
        assert!(matches!(compare(&a, &b), Err(Error::InvalidState(_))));
        assert!(matches!(compare(&b, &a), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_mismatched_lengths_is_error() {
        let a = evaluated(vec![1.0, 2.0]);
        let b = evaluated(vec![1.0]);
        assert!(matches!(compare(&a, &b), Err(Error::InvalidState(_))));
    }

    // ---- Partial-order properties ----

    proptest! {
        #[test]
        fn prop_irreflexive(objs in proptest::collection::vec(-1e6f64..1e6, 1..5)) {
            let a = evaluated(objs);
            prop_assert_eq!(compare(&a, &a).unwrap(), Dominance::Neither);
        }

        #[test]
        fn prop_antisymmetric(
            a_objs in proptest::collection::vec(-1e6f64..1e6, 3),
            b_objs in proptest::collection::vec(-1e6f64..1e6, 3),
        ) {
            let a = evaluated(a_objs);
            let b = evaluated(b_objs);
            let forward = compare(&a, &b).unwrap();
            let backward = compare(&b, &a).unwrap();
            let flipped = match forward {
                Dominance::First => Dominance::Second,
                Dominance::Second => Dominance::First,
                Dominance::Neither => Dominance::Neither,
            };
            prop_assert_eq!(backward, flipped);
        }

        #[test]
        fn prop_transitive(
            a_objs in proptest::collection::vec(-100f64..100.0, 2),
            b_objs in proptest::collection::vec(-100f64..100.0, 2),
            c_objs in proptest::collection::vec(-100f64..100.0, 2),
        ) {
            let a = evaluated(a_objs);
            let b = evaluated(b_objs);
            let c = evaluated(c_objs);
            if compare(&a, &b).unwrap() == Dominance::First
                && compare(&b, &c).unwrap() == Dominance::First
            {
                prop_assert_eq!(compare(&a, &c).unwrap(), Dominance::First);
            }
        }
    }
}
