// src/taxonomy/tree.rs
//! The constructed taxonomy and its query interface.

use std::collections::{BTreeSet, HashMap};

use crate::error::{HypernymError, Result};
use crate::taxonomy::node::Node;
use crate::taxonomy::rank::RankedNode;

/// The pruned, annotated is-a taxonomy over a dataset's leaf classes.
///
/// Built once by [`HierarchyBuilder`](crate::taxonomy::HierarchyBuilder);
/// strictly read-only afterwards. Every surviving node either counts at
/// least one dataset leaf below it or is itself a dataset leaf.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    pub(crate) arena: HashMap<String, Node>,
    pub(crate) leaf_ids: BTreeSet<String>,
    pub(crate) class_of: HashMap<String, u32>,
    pub(crate) short_names: HashMap<u32, String>,
    pub(crate) ranking: Vec<RankedNode>,
}

impl Taxonomy {
    /// Looks up a node, failing if the wnid is unknown.
    ///
    /// # Errors
    /// [`HypernymError::Lookup`] if `wnid` is not in the taxonomy.
    pub fn node(&self, wnid: &str) -> Result<&Node> {
        self.arena
            .get(wnid)
            .ok_or_else(|| HypernymError::unknown_node(wnid))
    }

    #[must_use]
    pub fn get(&self, wnid: &str) -> Option<&Node> {
        self.arena.get(wnid)
    }

    #[must_use]
    pub fn contains(&self, wnid: &str) -> bool {
        self.arena.contains_key(wnid)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates all nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.arena.values()
    }

    /// Dataset leaf wnids, ascending.
    #[must_use]
    pub fn leaf_ids(&self) -> &BTreeSet<String> {
        &self.leaf_ids
    }

    /// Leaf-class number for a wnid, if it is a dataset leaf.
    #[must_use]
    pub fn class_number(&self, wnid: &str) -> Option<u32> {
        self.class_of.get(wnid).copied()
    }

    /// Short display name for a leaf-class number.
    #[must_use]
    pub fn short_name(&self, class_num: u32) -> Option<&str> {
        self.short_names.get(&class_num).map(String::as_str)
    }

    /// Number of leaf classes in the dataset.
    #[must_use]
    pub fn leaf_class_count(&self) -> usize {
        self.leaf_ids.len()
    }

    /// Ranked ordering: subtree size descending, descendant count
    /// descending, wnid ascending.
    #[must_use]
    pub fn ranking(&self) -> &[RankedNode] {
        &self.ranking
    }

    /// Walks parent references upward from `descendant`, returning true iff
    /// `ancestor` is encountered before the chain runs out. The root is
    /// nobody's descendant and no node is its own ancestor.
    ///
    /// Cost is proportional to tree depth; calls are cheap enough that no
    /// memoization is kept.
    ///
    /// # Errors
    /// [`HypernymError::Lookup`] if `descendant` is not in the taxonomy.
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool> {
        let mut parent = self.node(descendant)?.parent_wnid.as_deref();
        while let Some(wnid) = parent {
            if wnid == ancestor {
                return Ok(true);
            }
            parent = self.get(wnid).and_then(|node| node.parent_wnid.as_deref());
        }
        Ok(false)
    }

    /// Read-only view of every descendant wnid of `wnid`, internal nodes
    /// included.
    ///
    /// # Errors
    /// [`HypernymError::Lookup`] if `wnid` is not in the taxonomy.
    pub fn descendants(&self, wnid: &str) -> Result<&BTreeSet<String>> {
        Ok(&self.node(wnid)?.descendant_set)
    }

    /// Descendants of `wnid` restricted to dataset leaves, as leaf-class
    /// numbers in ascending order.
    ///
    /// # Errors
    /// [`HypernymError::Lookup`] if `wnid` is not in the taxonomy.
    pub fn leaf_classes(&self, wnid: &str) -> Result<BTreeSet<u32>> {
        let set = self.descendants(wnid)?;
        Ok(set
            .iter()
            .filter(|id| self.leaf_ids.contains(id.as_str()))
            .filter_map(|id| self.class_of.get(id).copied())
            .collect())
    }
}
