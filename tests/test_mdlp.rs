//! Tests for the MDLP discretizer

#[path = "common/mod.rs"]
mod common;

use common::*;
use discretizers::discretizer::mdlp::{class_entropy, mdlp_cut_indices};
use discretizers::discretizer::{Discretizer, Mdlp, SortedSamples};

fn fit(pairs: &[(f64, f64)]) -> Discretizer {
    let (values, labels) = split_pairs(pairs);
    let mut discretizer = Discretizer::new(Mdlp::new());
    discretizer.fit(&values, Some(&labels)).unwrap();
    discretizer
}

#[test]
fn test_basic_discretization() {
    let discretizer = fit(&two_class_pairs());
    let transitions = discretizer.transitions();

    assert_eq!(ranges(transitions), vec![(1.0, 5.0), (6.0, 10.0)]);
    assert_eq!(labels_of(transitions), vec![3.0, 8.0]);
    assert!(numeric(&transitions[0]).is_first());
    assert!(numeric(&transitions[1]).is_last());
}

#[test]
fn test_no_discretization_for_single_class() {
    let discretizer = fit(&labeled_range(10, |_| 0.0));
    let transitions = discretizer.transitions();

    assert_eq!(ranges(transitions), vec![(1.0, 10.0)]);
    assert_eq!(transitions[0].discretized_value(), 5.5);
    assert!(numeric(&transitions[0]).is_first());
    assert!(numeric(&transitions[0]).is_last());
}

#[test]
fn test_three_classes() {
    let discretizer = fit(&three_class_pairs());
    let transitions = discretizer.transitions();

    assert_eq!(
        ranges(transitions),
        vec![(1.0, 5.0), (6.0, 10.0), (11.0, 15.0)]
    );
    assert_eq!(transitions[2].discretized_value(), 13.0);
}

#[test]
fn test_equal_distribution_gives_one_bin() {
    let discretizer = fit(&equal_distribution_pairs());
    assert_eq!(discretizer.transitions().len(), 1);
}

#[test]
fn test_paper_example_two_bins() {
    let discretizer = fit(&paper_pairs());
    assert_eq!(
        ranges(discretizer.transitions()),
        vec![(1.0, 14.0), (15.0, 40.0)]
    );
}

// Fayyad-Irani rule: take the highest-gain cut, then apply the MDL test. The
// upper range keeps 38 as its lower bound rather than splitting again at 28.
#[test]
fn test_noisy_data() {
    let discretizer = fit(&sixty_sample_pairs());
    let transitions = discretizer.transitions();

    assert_eq!(
        ranges(transitions),
        vec![(1.0, 20.0), (21.0, 37.0), (38.0, 60.0)]
    );
    assert!(numeric(&transitions[0]).is_first());
    assert!(numeric(&transitions[2]).is_last());
}

#[test]
fn test_negative_values() {
    let pairs: Vec<(f64, f64)> = three_class_pairs()
        .into_iter()
        .map(|(v, l)| (-v, l))
        .collect();
    let discretizer = fit(&pairs);
    let transitions = discretizer.transitions();

    let last = numeric(&transitions[2]);
    assert_eq!((last.min(), last.max()), (-5.0, -1.0));
    assert_eq!(transitions[2].discretized_value(), -3.0);
    assert!(!last.is_first());
    assert!(last.is_last());
}

#[test]
fn test_cut_indices_never_split_runs() {
    let samples = SortedSamples::new(vec![
        (1.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (3.0, 1.0),
        (3.0, 1.0),
        (4.0, 1.0),
    ])
    .unwrap();

    for index in mdlp_cut_indices(&samples) {
        assert_ne!(
            samples.value(index),
            samples.value(index + 1),
            "cut after index {} splits a run",
            index
        );
    }
}

#[test]
fn test_entropy_bounds() {
    assert_eq!(class_entropy(&[10]), 0.0);
    assert!((class_entropy(&[5, 5]) - 1.0).abs() < 1e-12);
    assert!((class_entropy(&[1, 1, 1, 1]) - 2.0).abs() < 1e-12);
}
