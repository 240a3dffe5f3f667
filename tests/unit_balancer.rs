// tests/unit_balancer.rs
//! Tests for balanced and unbalanced leaf-class grouping.

use std::collections::HashMap;

use hypernym_core::error::HypernymError;
use hypernym_core::sources::{ClassIndex, DatasetInfo, Edge};
use hypernym_core::superclass::group_subclasses;
use hypernym_core::taxonomy::{HierarchyBuilder, Taxonomy};

// --- Helpers ---

/// Two superclasses of very different sizes: "road" carries ten leaves
/// (classes 0..9), "water" carries four (classes 10..13).
fn skewed_taxonomy() -> Taxonomy {
    let mut names: Vec<(String, String)> = vec![
        ("root".to_string(), "vehicle".to_string()),
        ("road".to_string(), "road vehicle".to_string()),
        ("water".to_string(), "watercraft".to_string()),
    ];
    let mut leaves: Vec<(String, u32)> = Vec::new();
    let mut pairs: Vec<Edge> = vec![
        ("root".to_string(), "road".to_string()),
        ("root".to_string(), "water".to_string()),
    ];
    for i in 0..10u32 {
        let id = format!("car{i}");
        names.push((id.clone(), format!("car {i}")));
        pairs.push(("road".to_string(), id.clone()));
        leaves.push((id, i));
    }
    for i in 0..4u32 {
        let id = format!("boat{i}");
        names.push((id.clone(), format!("boat {i}")));
        pairs.push(("water".to_string(), id.clone()));
        leaves.push((id, 10 + i));
    }

    let mut class_of = HashMap::new();
    let mut short_names = HashMap::new();
    for (wnid, num) in &leaves {
        class_of.insert(wnid.clone(), *num);
        short_names.insert(*num, wnid.clone());
    }
    let info = DatasetInfo {
        leaf_ids: leaves.iter().map(|(w, _)| w.clone()).collect(),
        names: names.into_iter().collect(),
        class_index: ClassIndex {
            class_of,
            short_names,
        },
    };
    HierarchyBuilder::new(info)
        .build(&pairs)
        .expect("construction should succeed")
}

fn chosen(wnids: &[&str]) -> Vec<String> {
    wnids.iter().map(ToString::to_string).collect()
}

// --- Balancing ---

#[test]
fn test_balanced_groups_shrink_to_smallest() {
    let tax = skewed_taxonomy();
    let partition = group_subclasses(&tax, &chosen(&["road", "water"]), true).unwrap();

    assert_eq!(partition.class_ranges[0].len(), 4);
    assert_eq!(partition.class_ranges[1].len(), 4);
    // Truncation keeps the lowest class numbers.
    assert_eq!(
        partition.class_ranges[0].iter().copied().collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert_eq!(
        partition.class_ranges[1].iter().copied().collect::<Vec<_>>(),
        vec![10, 11, 12, 13]
    );
}

#[test]
fn test_unbalanced_groups_keep_natural_sizes() {
    let tax = skewed_taxonomy();
    let partition = group_subclasses(&tax, &chosen(&["road", "water"]), false).unwrap();

    assert_eq!(partition.class_ranges[0].len(), 10);
    assert_eq!(partition.class_ranges[1].len(), 4);
    assert_eq!(partition.covered_classes(), 14);
}

#[test]
fn test_balancing_is_reproducible() {
    let tax = skewed_taxonomy();
    let superclasses = chosen(&["road", "water"]);
    let first = group_subclasses(&tax, &superclasses, true).unwrap();
    let second = group_subclasses(&tax, &superclasses, true).unwrap();

    assert_eq!(first.class_ranges, second.class_ranges);
    assert_eq!(first.labels, second.labels);
}

// --- Output structure ---

#[test]
fn test_labels_are_keyed_by_position() {
    let tax = skewed_taxonomy();
    let partition = group_subclasses(&tax, &chosen(&["water", "road"]), true).unwrap();

    assert_eq!(partition.labels[&0], "watercraft");
    assert_eq!(partition.labels[&1], "road vehicle");
    assert_eq!(partition.superclasses[0], "water");
}

#[test]
fn test_empty_selection_yields_empty_partition() {
    let tax = skewed_taxonomy();
    let partition = group_subclasses(&tax, &[], true).unwrap();
    assert!(partition.is_empty());
    assert_eq!(partition.len(), 0);
    assert_eq!(partition.covered_classes(), 0);
}

// --- Failure modes ---

#[test]
fn test_unknown_superclass_fails_lookup() {
    let tax = skewed_taxonomy();
    let err = group_subclasses(&tax, &chosen(&["submarine"]), true).unwrap_err();
    assert!(matches!(err, HypernymError::Lookup { .. }));
}

#[test]
fn test_overlapping_superclasses_fail_integrity() {
    // "root" contains every leaf "road" contains, so grouping both must
    // trip the disjointness check.
    let tax = skewed_taxonomy();
    let err = group_subclasses(&tax, &chosen(&["root", "road"]), false).unwrap_err();
    assert!(
        matches!(err, HypernymError::Integrity(_)),
        "expected integrity error, got {err}"
    );
}
