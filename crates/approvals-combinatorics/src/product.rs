//! Full Cartesian product in odometer order.

use crate::space::Combination;

/// Iterator over every combination of the given domain sizes.
///
/// The last domain varies fastest, so `[2, 2]` yields `[0,0] [0,1] [1,0] [1,1]`.
/// A zero-sized domain yields nothing; an empty size list yields a single
/// empty combination.
#[derive(Debug, Clone)]
pub struct Product {
    sizes: Vec<usize>,
    next: Option<Vec<usize>>,
}

pub fn full_product(sizes: &[usize]) -> Product {
    let next = if sizes.contains(&0) {
        None
    } else {
        Some(vec![0; sizes.len()])
    };
    Product {
        sizes: sizes.to_vec(),
        next,
    }
}

impl Product {
    fn advance(&mut self, mut current: Vec<usize>) -> Option<Vec<usize>> {
        for pos in (0..current.len()).rev() {
            current[pos] += 1;
            if current[pos] < self.sizes[pos] {
                return Some(current);
            }
            current[pos] = 0;
        }
        None
    }
}

impl Iterator for Product {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let current = self.next.take()?;
        self.next = self.advance(current.clone());
        Some(Combination::new(current))
    }
}
