//! Laws of the set operations, checked on random domains of both representations.
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::domains::Domain;

const ROUNDS: usize = 200;

fn random_domain(rng: &mut SmallRng, sparse: bool) -> Domain<i32> {
    if sparse {
        let count = rng.gen_range(0..15);
        Domain::sparse((0..count).map(|_| rng.gen_range(-20..=20)))
    } else {
        let mut domain = Domain::empty();
        for _ in 0..rng.gen_range(0..4) {
            let lo = rng.gen_range(-20..=20);
            let hi = lo + rng.gen_range(0..8);
            domain = domain.union_range(&lo, &hi);
        }
        domain
    }
}

/// Runs `check` on random pairs of every combination of representations.
fn for_random_pairs(seed: u64, check: impl Fn(&Domain<i32>, &Domain<i32>)) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..ROUNDS {
        let pairs = [(false, false), (false, true), (true, false), (true, true)];
        for (left_sparse, right_sparse) in pairs {
            let a = random_domain(&mut rng, left_sparse);
            let b = random_domain(&mut rng, right_sparse);
            check(&a, &b);
        }
    }
}

#[test]
fn union_contains_both_operands() {
    for_random_pairs(1, |a, b| {
        let union = a.union_with(b);

        assert!(union.contains_domain(a), "{union} does not contain {a}");
        assert!(union.contains_domain(b), "{union} does not contain {b}");
        assert_eq!(union.size(), a.size() + b.size() - a.size_of_intersection(b));
    });
}

#[test]
fn intersection_size_matches_the_materialised_intersection() {
    for_random_pairs(2, |a, b| {
        let intersection = a.intersect(b);

        assert_eq!(intersection.size(), a.size_of_intersection(b));
        assert_eq!(intersection.is_empty(), !a.intersects(b));
        assert!(intersection.values().all(|value| a.contains(&value) && b.contains(&value)));
    });
}

#[test]
fn difference_shares_nothing_with_the_subtrahend() {
    for_random_pairs(3, |a, b| {
        let difference = a.subtract(b);

        assert!(!difference.intersects(b), "{difference} intersects {b}");
        assert!(a.contains_domain(&difference));
        assert!(a.union_with(b).subtract(b).equals_domain(&difference));
    });
}

#[test]
fn operations_with_self_are_idempotent() {
    for_random_pairs(4, |a, _| {
        assert_eq!(a.union_with(a), *a);
        assert_eq!(a.intersect(a), *a);
        assert!(a.subtract(a).is_empty());
    });
}

#[test]
fn results_keep_the_receiver_representation() {
    for_random_pairs(5, |a, b| {
        assert_eq!(a.union_with(b).is_sparse(), a.is_sparse());
        assert_eq!(a.intersect(b).is_sparse(), a.is_sparse());
        assert_eq!(a.subtract(b).is_sparse(), a.is_sparse());
    });
}

#[test]
fn enumerations_agree_with_the_size() {
    for_random_pairs(6, |a, _| {
        assert_eq!(a.values().count(), a.size());
        assert_eq!(
            a.intervals().map(|interval| interval.size()).sum::<usize>(),
            a.size()
        );
        assert_eq!(a.values().next().as_ref(), a.min());
    });
}

#[test]
fn both_representations_hold_the_same_sets() {
    let intervals = Domain::interval(0, 255)
        .intersect_range(&0, &100)
        .intersect_range(&50, &255)
        .intersect(&Domain::interval(60, 80));
    let sparse = Domain::sparse_range(0, 255)
        .intersect_range(&0, &100)
        .intersect_range(&50, &255)
        .intersect(&Domain::sparse_range(60, 80));

    assert_eq!(intervals.size(), 21);
    assert_eq!(intervals, sparse);
    assert_eq!(intervals.min(), Some(&60));
    assert_eq!(sparse.max(), Some(&80));
}
