//! Pairwise coverage targets and coverage checking.

use std::collections::HashSet;

use crate::space::Combination;

/// A pair of (domain, value) choices that must appear together in some combination.
///
/// `first < second` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairRequirement {
    pub first: usize,
    pub first_value: usize,
    pub second: usize,
    pub second_value: usize,
}

impl PairRequirement {
    /// Whether `combination` selects both values of this pair.
    pub fn is_met_by(&self, combination: &Combination) -> bool {
        combination.indices.get(self.first) == Some(&self.first_value)
            && combination.indices.get(self.second) == Some(&self.second_value)
    }
}

/// Every cross-domain value pair, ordered by first domain, second domain,
/// first value, then second value.
pub fn all_pairs_targets(sizes: &[usize]) -> Vec<PairRequirement> {
    let mut targets = Vec::new();

    for first in 0..sizes.len() {
        for second in (first + 1)..sizes.len() {
            for first_value in 0..sizes[first] {
                for second_value in 0..sizes[second] {
                    targets.push(PairRequirement {
                        first,
                        first_value,
                        second,
                        second_value,
                    });
                }
            }
        }
    }

    targets
}

/// The subset of `targets` met by at least one of `combinations`.
pub fn check_coverage(
    combinations: &[Combination],
    targets: &[PairRequirement],
) -> HashSet<PairRequirement> {
    targets
        .iter()
        .filter(|t| combinations.iter().any(|c| t.is_met_by(c)))
        .copied()
        .collect()
}
