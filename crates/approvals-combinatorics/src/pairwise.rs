//! Greedy pairwise covering sets.
//!
//! The construction is a deterministic one-row-at-a-time heuristic. Each row
//! is seeded with the first still-uncovered pair (ordered by domain index,
//! then value index). The remaining positions are filled in domain order with
//! the value that covers the most uncovered pairs against the positions
//! already chosen; ties go to the lowest value index, so a position with
//! nothing left to cover gets its first value.
//!
//! Every row covers at least its seed pair, so rows are distinct and the set
//! never exceeds the full product. The result is small in practice but not
//! provably minimal.

use crate::coverage::PairRequirement;
use crate::product::full_product;
use crate::space::Combination;

/// Contiguous slice of the pair table holding every value pair of two domains.
#[derive(Debug, Clone, Copy)]
struct Block {
    first: usize,
    second: usize,
    start: usize,
}

/// One flag per cross-domain value pair, set while the pair is still uncovered.
#[derive(Debug)]
struct PairTable {
    sizes: Vec<usize>,
    blocks: Vec<Block>,
    offsets: Vec<Vec<usize>>,
    uncovered: Vec<bool>,
    remaining: usize,
    /// Every slot below the cursor is covered.
    cursor: usize,
}

impl PairTable {
    fn new(sizes: &[usize]) -> Self {
        let n = sizes.len();
        let mut offsets = vec![vec![0; n]; n];
        let mut blocks = Vec::new();
        let mut start = 0;

        for first in 0..n {
            for second in (first + 1)..n {
                offsets[first][second] = start;
                blocks.push(Block {
                    first,
                    second,
                    start,
                });
                start += sizes[first] * sizes[second];
            }
        }

        Self {
            sizes: sizes.to_vec(),
            blocks,
            offsets,
            uncovered: vec![true; start],
            remaining: start,
            cursor: 0,
        }
    }

    fn len(&self) -> usize {
        self.uncovered.len()
    }

    fn slot(&self, a: usize, a_value: usize, b: usize, b_value: usize) -> usize {
        let (first, first_value, second, second_value) = if a < b {
            (a, a_value, b, b_value)
        } else {
            (b, b_value, a, a_value)
        };
        self.offsets[first][second] + first_value * self.sizes[second] + second_value
    }

    /// Number of uncovered pairs `(position=value)` would form with the assigned positions.
    fn gain(&self, position: usize, value: usize, assigned: &[Option<usize>]) -> usize {
        assigned
            .iter()
            .enumerate()
            .filter_map(|(other, v)| v.map(|v| (other, v)))
            .filter(|&(other, other_value)| {
                other != position && self.uncovered[self.slot(position, value, other, other_value)]
            })
            .count()
    }

    fn first_uncovered(&mut self) -> Option<PairRequirement> {
        while self.cursor < self.uncovered.len() && !self.uncovered[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor == self.uncovered.len() {
            return None;
        }

        let cursor = self.cursor;
        let block = self.blocks[self.blocks.partition_point(|b| b.start <= cursor) - 1];
        let width = self.sizes[block.second];
        let offset = cursor - block.start;

        Some(PairRequirement {
            first: block.first,
            first_value: offset / width,
            second: block.second,
            second_value: offset % width,
        })
    }

    /// Mark every pair in `indices` covered. Returns how many were newly covered.
    fn cover(&mut self, indices: &[usize]) -> usize {
        let mut newly = 0;
        for first in 0..indices.len() {
            for second in (first + 1)..indices.len() {
                let slot = self.slot(first, indices[first], second, indices[second]);
                if self.uncovered[slot] {
                    self.uncovered[slot] = false;
                    newly += 1;
                }
            }
        }
        self.remaining -= newly;
        newly
    }
}

/// Build a covering set for the given domain sizes.
///
/// Fewer than two domains have no pairs to cover, so the full product is
/// returned instead.
pub fn pairwise_covering(sizes: &[usize]) -> Vec<Combination> {
    if sizes.len() < 2 || sizes.contains(&0) {
        return full_product(sizes).collect();
    }

    let mut table = PairTable::new(sizes);
    let mut combinations = Vec::new();

    while let Some(seed) = table.first_uncovered() {
        let indices = complete_row(&table, seed);
        let newly = table.cover(&indices);
        debug_assert!(newly > 0, "row must cover its seed pair");
        combinations.push(Combination::new(indices));
    }

    debug_assert_eq!(table.remaining, 0);
    tracing::debug!(
        combinations = combinations.len(),
        pairs = table.len(),
        "built pairwise covering set"
    );

    combinations
}

fn complete_row(table: &PairTable, seed: PairRequirement) -> Vec<usize> {
    let mut assigned: Vec<Option<usize>> = vec![None; table.sizes.len()];
    assigned[seed.first] = Some(seed.first_value);
    assigned[seed.second] = Some(seed.second_value);

    for position in 0..assigned.len() {
        if assigned[position].is_some() {
            continue;
        }
        let mut best_value = 0;
        let mut best_gain = 0;
        for value in 0..table.sizes[position] {
            let gain = table.gain(position, value, &assigned);
            if gain > best_gain {
                best_value = value;
                best_gain = gain;
            }
        }
        assigned[position] = Some(best_value);
    }

    assigned.into_iter().map(|v| v.unwrap_or(0)).collect()
}
