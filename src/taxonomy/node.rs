// src/taxonomy/node.rs
//! A single entry in the is-a taxonomy.

use std::collections::BTreeSet;
use std::fmt;

/// A node in the WordNet-style is-a hierarchy.
///
/// Created lazily when its wnid is first referenced during edge ingestion,
/// mutated only by the construction phases, read-only once the taxonomy is
/// built. A node that ends construction with no descendants and no leaf
/// class is dead weight and gets pruned.
#[derive(Debug, Clone)]
pub struct Node {
    /// WordNet synset id (`n` followed by eight digits).
    pub wnid: String,
    /// Human-readable synset description from the words table.
    pub name: String,
    /// Dataset leaf-class number; `None` for internal synsets.
    pub class_num: Option<u32>,
    /// Parent wnid; `None` only for the root.
    pub parent_wnid: Option<String>,
    /// Number of dataset leaves strictly below this node.
    pub descendant_count: usize,
    /// All descendant wnids that lead down to a dataset leaf, internal
    /// nodes included. Ordered so iteration is deterministic.
    pub descendant_set: BTreeSet<String>,
}

impl Node {
    #[must_use]
    pub fn new(wnid: &str, name: &str) -> Self {
        Self {
            wnid: wnid.to_string(),
            name: name.to_string(),
            class_num: None,
            parent_wnid: None,
            descendant_count: 0,
            descendant_set: BTreeSet::new(),
        }
    }

    /// True if this node is one of the dataset's labeled leaf classes.
    #[must_use]
    pub fn is_dataset_leaf(&self) -> bool {
        self.class_num.is_some()
    }

    /// True if this node has no parent reference.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_wnid.is_none()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class_num {
            Some(num) => write!(
                f,
                "Name: ({}), Class: ({}), Descendants: ({})",
                self.name, num, self.descendant_count
            ),
            None => write!(
                f,
                "Name: ({}), Class: (-), Descendants: ({})",
                self.name, self.descendant_count
            ),
        }
    }
}
