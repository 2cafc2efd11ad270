//! Non-dominated solution archive.
//!
//! [`NonDominatedArchive`] maintains a set of mutually non-dominated,
//! objective-distinct solutions. Insertion enforces the invariant: a
//! candidate dominated by any member is rejected, an exact objective
//! duplicate is rejected, and an accepted candidate first evicts every
//! member it dominates. The resulting membership is independent of
//! insertion order.
//!
//! The archive itself is unbounded; the ranked GA bounds its result by
//! feeding in only the survivors of environmental selection, while random
//! search lets the archive grow freely.

use crate::dominance::{self, Dominance};
use crate::error::Result;
use crate::solution::Solution;

/// A set of mutually non-dominated solutions.
///
/// Backed by a flat `Vec`; removals are computed as an index mask in a
/// single dominance sweep, then applied at once. Iteration order is
/// unspecified but deterministic for an unmutated archive.
#[derive(Debug, Clone, Default)]
pub struct NonDominatedArchive {
    members: Vec<Solution>,
}

impl NonDominatedArchive {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to insert `candidate`, returning whether it was added.
    ///
    /// Rejected candidates (dominated by a member, or duplicating a member's
    /// objective vector exactly) leave the archive untouched. An accepted
    /// candidate removes every member it dominates before being added.
    ///
    /// One dominance comparison per current member.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::error::Error::InvalidState) if the
    /// candidate or any member is unevaluated or has a mismatched objective
    /// count.
    pub fn add(&mut self, candidate: Solution) -> Result<bool> {
        let mut evict = vec![false; self.members.len()];

        for (i, member) in self.members.iter().enumerate() {
            match dominance::compare(&candidate, member)? {
                Dominance::First => evict[i] = true,
                Dominance::Second => return Ok(false),
                Dominance::Neither => {
                    if candidate.same_objectives(member) {
                        return Ok(false);
                    }
                }
            }
        }

        if evict.iter().any(|&e| e) {
            let mut idx = 0;
            self.members.retain(|_| {
                let keep = !evict[idx];
                idx += 1;
                keep
            });
        }
        self.members.push(candidate);
        Ok(true)
    }

    /// Number of archived solutions.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the current members. Restartable; order is stable as
    /// long as the archive is not mutated.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.members.iter()
    }

    /// The members as a slice.
    pub fn as_slice(&self) -> &[Solution] {
        &self.members
    }

    /// Consumes the archive, yielding its members.
    pub fn into_solutions(self) -> Vec<Solution> {
        self.members
    }
}

impl<'a> IntoIterator for &'a NonDominatedArchive {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
