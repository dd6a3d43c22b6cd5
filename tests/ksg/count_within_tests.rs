// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Binary search is easy to get wrong, so the range counters get their own cases.

use ksgmeasure::count_within;
use ksgmeasure::estimators::approaches::ksg::utils::count_within_radius;
use rstest::rstest;

use crate::test_helpers::{Rng, SeedableRng, StdRng};

#[rstest]
#[case::power_of_two_array(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 2.0, 5.0, 2)]
#[case::full_array_within(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], -3.0, 70.0, 6)]
#[case::left_side(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], -1.0, 2.0, 2)]
#[case::right_side(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 4.0, 7.0, 2)]
#[case::none_matching_at_initial_pos(&[1.0, 2.0, 3.0, 4.0], 2.0, 2.0, 0)]
#[case::none_matching_on_left_side(&[0.1, 1.2, 2.3, 3.4, 4.5], 0.7, 1.1, 0)]
#[case::none_matching_on_right_side(&[0.1, 1.2, 2.3, 3.4, 4.5], 3.4, 4.5, 0)]
#[case::none_matching_in_duplicate_array(&[1.0; 9], 2.0, 3.0, 0)]
#[case::duplicate_array_and_exact_bounds(&[1.0; 9], 1.0, 1.0, 0)]
#[case::repeated_values(&[0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0], 0.0, 3.0, 5)]
#[case::empty_array(&[], -1.0, 1.0, 0)]
#[case::inverted_bounds(&[0.0, 1.0, 2.0, 3.0], 3.0, 0.0, 0)]
fn count_within_known_cases(
    #[case] array: &[f64],
    #[case] low: f64,
    #[case] high: f64,
    #[case] expected: usize,
) {
    assert_eq!(count_within(array, low, high), expected);
}

fn linear_scan(array: &[f64], low: f64, high: f64) -> usize {
    array.iter().filter(|&&v| low < v && v < high).count()
}

fn random_sorted(rng: &mut StdRng, len: usize) -> Vec<f64> {
    // coarse grid of quarter steps around zero to force duplicates and exact bound hits
    let mut v: Vec<f64> = (0..len)
        .map(|_| rng.gen_range(-20i32..20) as f64 * 0.25)
        .collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

#[test]
fn count_within_matches_linear_scan() {
    let mut rng = StdRng::seed_from_u64(2020);
    for len in [0usize, 1, 2, 3, 7, 8, 31, 100] {
        let array = random_sorted(&mut rng, len);
        for _ in 0..200 {
            let a = rng.gen_range(-24i32..24) as f64 * 0.25;
            let b = rng.gen_range(-24i32..24) as f64 * 0.25;
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            assert_eq!(
                count_within(&array, low, high),
                linear_scan(&array, low, high),
                "array={array:?}, low={low}, high={high}"
            );
        }
    }
}

#[test]
fn count_within_radius_matches_linear_scan() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [1usize, 5, 16, 64] {
        let array = random_sorted(&mut rng, len);
        for &center in &array {
            for radius in [0.0, 0.25, 0.3, 1.0, 2.5, 100.0] {
                let expected = array
                    .iter()
                    .filter(|&&v| (v - center).abs() < radius)
                    .count();
                assert_eq!(count_within_radius(&array, center, radius), expected);
            }
        }
    }
}

#[test]
fn count_within_radius_zero_radius_counts_nothing() {
    let array = [1.0, 2.0, 2.0, 2.0, 3.0];
    assert_eq!(count_within_radius(&array, 2.0, 0.0), 0);
    // the center and its duplicates are inside any positive radius
    assert_eq!(count_within_radius(&array, 2.0, 0.5), 3);
    assert_eq!(count_within_radius(&array, 2.0, 1.0), 3);
    assert_eq!(count_within_radius(&array, 2.0, 1.5), 5);
}
