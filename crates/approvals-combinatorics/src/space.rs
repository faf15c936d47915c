//! Parameter spaces and index combinations.

/// Errors raised while validating a parameter space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    #[error("Empty parameter domain at position {index}: every argument needs at least one candidate value")]
    EmptyDomain { index: usize },

    #[error("Parameter space too large: the product of domain sizes overflows")]
    TooLarge,
}

/// An ordered sequence of parameter domains, one per positional argument.
///
/// Construction validates that no domain is empty, so generation never has
/// to deal with an unsatisfiable position.
#[derive(Debug)]
pub struct ParameterSpace<'a, V> {
    domains: &'a [Vec<V>],
}

impl<'a, V> ParameterSpace<'a, V> {
    pub fn new(domains: &'a [Vec<V>]) -> Result<Self, SpaceError> {
        if let Some(index) = domains.iter().position(Vec::is_empty) {
            return Err(SpaceError::EmptyDomain { index });
        }
        Ok(Self { domains })
    }

    pub fn domains(&self) -> &'a [Vec<V>] {
        self.domains
    }

    /// Number of argument positions.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Size of each domain, in position order.
    pub fn sizes(&self) -> Vec<usize> {
        self.domains.iter().map(Vec::len).collect()
    }

    /// Size of the full Cartesian product.
    pub fn total(&self) -> Result<usize, SpaceError> {
        total_size(&self.sizes())
    }

    /// Resolve a combination into the argument values it selects.
    pub fn resolve(&self, combination: &Combination) -> Vec<&'a V> {
        combination
            .indices
            .iter()
            .zip(self.domains)
            .map(|(&i, domain)| &domain[i])
            .collect()
    }
}

/// Product of the domain sizes. An empty space has exactly one (empty) combination.
pub fn total_size(sizes: &[usize]) -> Result<usize, SpaceError> {
    sizes
        .iter()
        .try_fold(1usize, |acc, &s| acc.checked_mul(s))
        .ok_or(SpaceError::TooLarge)
}

/// One value index per domain. `indices[i]` always indexes into domain `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    pub indices: Vec<usize>,
}

impl Combination {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}
