// src/superclass/mod.rs
//! Superclass selection and balanced leaf-class grouping.

pub mod balancer;
pub mod registry;
pub mod selector;

pub use balancer::{group_subclasses, Partition};
pub use registry::{common_superclasses, group_names};
pub use selector::{select_superclasses, SelectionConstraints};

use crate::error::Result;
use crate::taxonomy::Taxonomy;

/// Selects up to `n` superclasses and groups their leaf classes in one
/// step.
pub fn partition(
    taxonomy: &Taxonomy,
    n: usize,
    constraints: &SelectionConstraints,
    balanced: bool,
) -> Result<Partition> {
    let superclasses = select_superclasses(taxonomy, n, constraints)?;
    group_subclasses(taxonomy, &superclasses, balanced)
}
