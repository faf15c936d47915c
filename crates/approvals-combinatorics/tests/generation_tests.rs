use std::collections::HashSet;

use approvals_combinatorics::{
    all_pairs_targets, check_coverage, generate, total_size, Mode, ParameterSpace, SpaceError,
};
use proptest::prelude::*;

fn sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 1..6)
}

fn space_of(sizes: &[usize]) -> Vec<Vec<usize>> {
    sizes.iter().map(|&s| (0..s).collect()).collect()
}

#[test]
fn test_full_mode_example_order() {
    let domains = vec![vec!["water", "cola"], vec!["1", "4"]];
    let space = ParameterSpace::new(&domains).unwrap();
    let resolved: Vec<Vec<&str>> = generate(&space, Mode::Full)
        .iter()
        .map(|c| space.resolve(c).into_iter().copied().collect())
        .collect();
    assert_eq!(
        resolved,
        vec![
            vec!["water", "1"],
            vec!["water", "4"],
            vec!["cola", "1"],
            vec!["cola", "4"],
        ]
    );
}

#[test]
fn test_pairwise_smaller_than_product_for_wide_space() {
    let domains = space_of(&[3, 3, 3, 3]);
    let space = ParameterSpace::new(&domains).unwrap();
    let combos = generate(&space, Mode::Pairwise);
    assert!(combos.len() < 81, "got {} rows", combos.len());
    let targets = all_pairs_targets(&space.sizes());
    assert_eq!(check_coverage(&combos, &targets).len(), targets.len());
}

#[test]
fn test_empty_domain_fails_before_generation() {
    let domains: Vec<Vec<u8>> = vec![vec![1], vec![]];
    assert!(matches!(
        ParameterSpace::new(&domains),
        Err(SpaceError::EmptyDomain { index: 1 })
    ));
}

proptest! {
    #[test]
    fn prop_full_mode_yields_product(sizes in sizes_strategy()) {
        let domains = space_of(&sizes);
        let space = ParameterSpace::new(&domains).unwrap();
        let combos = generate(&space, Mode::Full);

        prop_assert_eq!(combos.len(), total_size(&sizes).unwrap());
        for combo in &combos {
            prop_assert_eq!(combo.indices.len(), sizes.len());
            for (i, &v) in combo.indices.iter().enumerate() {
                prop_assert!(v < sizes[i]);
            }
        }
        let distinct: HashSet<_> = combos.iter().collect();
        prop_assert_eq!(distinct.len(), combos.len());
    }

    #[test]
    fn prop_pairwise_covers_every_pair(sizes in sizes_strategy()) {
        let domains = space_of(&sizes);
        let space = ParameterSpace::new(&domains).unwrap();
        let combos = generate(&space, Mode::Pairwise);
        let targets = all_pairs_targets(&sizes);

        prop_assert_eq!(check_coverage(&combos, &targets).len(), targets.len());
        prop_assert!(combos.len() <= total_size(&sizes).unwrap());
        let distinct: HashSet<_> = combos.iter().collect();
        prop_assert_eq!(distinct.len(), combos.len());
    }

    #[test]
    fn prop_generation_is_deterministic(sizes in sizes_strategy()) {
        let domains = space_of(&sizes);
        let space = ParameterSpace::new(&domains).unwrap();
        prop_assert_eq!(generate(&space, Mode::Pairwise), generate(&space, Mode::Pairwise));
        prop_assert_eq!(generate(&space, Mode::Full), generate(&space, Mode::Full));
    }
}
