//! Combination generation for combinatorial approval tests.
//!
//! Two modes are supported:
//! - **full**: the Cartesian product of every parameter domain, last domain
//!   varying fastest.
//! - **pairwise**: a greedy covering set in which every cross-domain pair of
//!   values appears in at least one combination.
//!
//! Both modes are deterministic: the same space always yields the same
//! combinations in the same order.

pub mod coverage;
pub mod pairwise;
pub mod product;
pub mod space;

pub use coverage::{all_pairs_targets, check_coverage, PairRequirement};
pub use pairwise::pairwise_covering;
pub use product::{full_product, Product};
pub use space::{total_size, Combination, ParameterSpace, SpaceError};

/// How combinations are drawn from a parameter space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every combination, in Cartesian-product order.
    #[default]
    Full,
    /// A best-effort minimal set covering every cross-domain value pair.
    Pairwise,
}

/// Generate the combinations of `space` for the given mode.
pub fn generate<V>(space: &ParameterSpace<'_, V>, mode: Mode) -> Vec<Combination> {
    match mode {
        Mode::Full => full_product(&space.sizes()).collect(),
        Mode::Pairwise => pairwise_covering(&space.sizes()),
    }
}
