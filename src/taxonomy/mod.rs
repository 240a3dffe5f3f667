// src/taxonomy/mod.rs
//! WordNet is-a hierarchy construction and queries.

pub mod builder;
pub mod node;
pub mod rank;
pub mod tree;

pub use builder::HierarchyBuilder;
pub use node::Node;
pub use rank::RankedNode;
pub use tree::Taxonomy;

use std::path::Path;

use crate::error::Result;
use crate::sources::{self, IS_A_FILE};

/// Loads every dataset table and builds the taxonomy in one shot.
///
/// # Errors
/// Any loader or construction failure from the underlying phases.
pub fn load(root: &Path, info_dir: &Path, split: &str) -> Result<Taxonomy> {
    let info = sources::load_dataset_info(root, info_dir, split)?;
    let edges = sources::load_edges(&info_dir.join(IS_A_FILE))?;
    HierarchyBuilder::new(info).build(&edges)
}
