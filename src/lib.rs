// src/lib.rs
//! Taxonomy construction and balanced superclass grouping over WordNet
//! is-a hierarchies, for ImageNet-style datasets.

pub mod cli;
pub mod config;
pub mod error;
pub mod reporting;
pub mod sources;
pub mod superclass;
pub mod taxonomy;

pub use error::{HypernymError, Result};
pub use superclass::{Partition, SelectionConstraints};
pub use taxonomy::{HierarchyBuilder, Node, Taxonomy};
