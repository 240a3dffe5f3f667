// src/superclass/balancer.rs
//! Disjoint leaf-class grouping under chosen superclasses.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{HypernymError, Result};
use crate::taxonomy::Taxonomy;

/// The final grouping: superclasses, their leaf-class sets aligned by
/// position, and display labels keyed by position.
#[derive(Debug, Clone, Serialize)]
pub struct Partition {
    pub superclasses: Vec<String>,
    pub class_ranges: Vec<BTreeSet<u32>>,
    pub labels: BTreeMap<usize, String>,
}

impl Partition {
    #[must_use]
    pub fn len(&self) -> usize {
        self.superclasses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.superclasses.is_empty()
    }

    /// Total leaf classes covered across all groups.
    #[must_use]
    pub fn covered_classes(&self) -> usize {
        self.class_ranges.iter().map(BTreeSet::len).sum()
    }
}

/// Collects each superclass's leaf classes, optionally truncating every
/// group to the smallest group's descendant count. Truncation drops the
/// highest class numbers, so repeated runs agree on membership.
///
/// An empty superclass list yields an empty partition.
///
/// # Errors
/// [`HypernymError::Lookup`] when a superclass is unknown;
/// [`HypernymError::Integrity`] when the resulting groups overlap.
pub fn group_subclasses(
    taxonomy: &Taxonomy,
    superclasses: &[String],
    balanced: bool,
) -> Result<Partition> {
    if superclasses.is_empty() {
        return Ok(Partition {
            superclasses: Vec::new(),
            class_ranges: Vec::new(),
            labels: BTreeMap::new(),
        });
    }

    let mut min_size = usize::MAX;
    for wnid in superclasses {
        min_size = min_size.min(taxonomy.node(wnid)?.descendant_count);
    }

    let mut class_ranges = Vec::with_capacity(superclasses.len());
    let mut labels = BTreeMap::new();
    for (idx, wnid) in superclasses.iter().enumerate() {
        let mut classes = taxonomy.leaf_classes(wnid)?;
        if balanced && classes.len() > min_size {
            classes = classes.iter().copied().take(min_size).collect();
        }
        labels.insert(idx, taxonomy.node(wnid)?.name.clone());
        class_ranges.push(classes);
    }

    verify_disjoint(&class_ranges)?;

    Ok(Partition {
        superclasses: superclasses.to_vec(),
        class_ranges,
        labels,
    })
}

fn verify_disjoint(class_ranges: &[BTreeSet<u32>]) -> Result<()> {
    for (i, a) in class_ranges.iter().enumerate() {
        for (j, b) in class_ranges.iter().enumerate().skip(i + 1) {
            if !a.is_disjoint(b) {
                return Err(HypernymError::Integrity(format!(
                    "leaf-class groups {i} and {j} overlap"
                )));
            }
        }
    }
    Ok(())
}
