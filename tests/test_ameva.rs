//! Tests for the Ameva discretizer

#[path = "common/mod.rs"]
mod common;

use common::*;
use discretizers::discretizer::ameva::{ameva_criterion, ameva_search};
use discretizers::discretizer::interval::intervals_from_ends;
use discretizers::discretizer::{Ameva, BinLabeling, Discretizer, SortedSamples};

fn fit(pairs: &[(f64, f64)], ameva: Ameva) -> Discretizer {
    let (values, labels) = split_pairs(pairs);
    let mut discretizer = Discretizer::new(ameva);
    discretizer.fit(&values, Some(&labels)).unwrap();
    discretizer
}

#[test]
fn test_two_classes_split_in_the_middle() {
    let discretizer = fit(&two_class_pairs(), Ameva::new());
    let transitions = discretizer.transitions();

    assert_eq!(ranges(transitions), vec![(1.0, 5.0), (6.0, 10.0)]);
    assert_eq!(labels_of(transitions), vec![3.0, 8.0]);

    assert!(numeric(&transitions[0]).is_first());
    assert!(!numeric(&transitions[0]).is_last());
    assert!(!numeric(&transitions[1]).is_first());
    assert!(numeric(&transitions[1]).is_last());
}

#[test]
fn test_single_class_is_not_discretized() {
    let pairs = labeled_range(10, |_| 0.0);
    let discretizer = fit(&pairs, Ameva::new());
    let transitions = discretizer.transitions();

    assert_eq!(transitions.len(), 1);
    assert_eq!(ranges(transitions), vec![(1.0, 10.0)]);
    assert_eq!(transitions[0].discretized_value(), 5.5);
    assert!(numeric(&transitions[0]).is_first());
    assert!(numeric(&transitions[0]).is_last());
}

#[test]
fn test_three_classes() {
    let discretizer = fit(&three_class_pairs(), Ameva::new());
    let transitions = discretizer.transitions();

    assert_eq!(transitions.len(), 3);
    let last = numeric(&transitions[2]);
    assert_eq!((last.min(), last.max()), (11.0, 15.0));
    assert_eq!(transitions[2].discretized_value(), 13.0);
    assert!(!last.is_first());
    assert!(last.is_last());
}

#[test]
fn test_equal_distribution_gives_one_bin() {
    let discretizer = fit(&equal_distribution_pairs(), Ameva::new());
    assert_eq!(discretizer.transitions().len(), 1);
}

#[test]
fn test_criterion_of_known_partition() {
    let labels = [
        0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0,
    ];
    let samples = SortedSamples::new(
        labels
            .iter()
            .enumerate()
            .map(|(i, &l)| ((i + 1) as f64, l as f64))
            .collect(),
    )
    .unwrap();

    // Cut points 7.5, 19.5 and 24.5
    let intervals = intervals_from_ends(&samples, &[6, 18, 23]);
    let value = ameva_criterion(&intervals, &samples.class_totals());
    assert!((value - 3.04).abs() < 0.01, "criterion was {}", value);
}

#[test]
fn test_search_on_noisy_data() {
    let samples = SortedSamples::from_unsorted(
        &sixty_sample_pairs().iter().map(|p| p.0).collect::<Vec<_>>(),
        &sixty_sample_pairs().iter().map(|p| p.1).collect::<Vec<_>>(),
    )
    .unwrap();

    let search = ameva_search(&samples);
    assert_eq!(search.cut_points, vec![20.5, 37.5]);
    assert!(search.criterion > 0.0);
}

#[test]
fn test_ordinal_labeling() {
    let discretizer = fit(&three_class_pairs(), Ameva::with_labeling(BinLabeling::Ordinal));
    let transitions = discretizer.transitions();

    assert_eq!(labels_of(transitions), vec![0.0, 1.0, 2.0]);
    assert_eq!(ranges(transitions), vec![(1.0, 5.5), (5.5, 10.5), (10.5, 15.0)]);
}

#[test]
fn test_apply_routes_unseen_values() {
    let discretizer = fit(&two_class_pairs(), Ameva::new());

    assert_eq!(discretizer.apply(&(-100.0).into()).unwrap(), 3.0);
    assert_eq!(discretizer.apply(&5.5.into()).unwrap(), 3.0);
    assert_eq!(discretizer.apply(&1000.0.into()).unwrap(), 8.0);
}
