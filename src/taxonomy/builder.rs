// src/taxonomy/builder.rs
//! Phased construction of the taxonomy.

use std::collections::HashMap;

use crate::error::{HypernymError, Result};
use crate::sources::{DatasetInfo, Edge};
use crate::taxonomy::node::Node;
use crate::taxonomy::rank;
use crate::taxonomy::tree::Taxonomy;

/// Builds a pruned, annotated [`Taxonomy`] from the raw dataset tables.
///
/// Construction runs in four phases: edge ingestion, leaf annotation,
/// bottom-up aggregation, pruning. A final verification pass refuses to
/// hand out a tree where any surviving node neither counts a descendant
/// nor carries a leaf class.
pub struct HierarchyBuilder {
    info: DatasetInfo,
    arena: HashMap<String, Node>,
}

impl HierarchyBuilder {
    #[must_use]
    pub fn new(info: DatasetInfo) -> Self {
        Self {
            info,
            arena: HashMap::new(),
        }
    }

    /// Runs every phase over the edge list and hands back the finished
    /// taxonomy.
    pub fn build(mut self, edges: &[Edge]) -> Result<Taxonomy> {
        self.ingest_edges(edges)?;
        self.annotate_leaves()?;
        self.aggregate()?;
        self.prune();
        self.verify()?;

        let ranking = rank::build_ranking(&self.arena);
        let DatasetInfo {
            leaf_ids,
            class_index,
            ..
        } = self.info;
        Ok(Taxonomy {
            arena: self.arena,
            leaf_ids,
            class_of: class_index.class_of,
            short_names: class_index.short_names,
            ranking,
        })
    }

    /// Phase 1: resolve or create both endpoints of every edge, then point
    /// the child at its parent. Later edges win when a child is named
    /// twice.
    fn ingest_edges(&mut self, edges: &[Edge]) -> Result<()> {
        for (parent, child) in edges {
            self.get_or_insert(parent)?;
            self.get_or_insert(child)?;
            if let Some(node) = self.arena.get_mut(child) {
                node.parent_wnid = Some(parent.clone());
            }
        }
        Ok(())
    }

    /// Creation resolves the synset name eagerly; an identifier without a
    /// known name aborts construction rather than entering the arena
    /// half-formed.
    fn get_or_insert(&mut self, wnid: &str) -> Result<()> {
        if self.arena.contains_key(wnid) {
            return Ok(());
        }
        let name = self
            .info
            .names
            .get(wnid)
            .ok_or_else(|| HypernymError::no_name(wnid))?;
        self.arena.insert(wnid.to_string(), Node::new(wnid, name));
        Ok(())
    }

    /// Phase 2: mark every dataset leaf with its class number and reset its
    /// descendant count.
    fn annotate_leaves(&mut self) -> Result<()> {
        for wnid in &self.info.leaf_ids {
            let class_num = self
                .info
                .class_index
                .class_of
                .get(wnid)
                .copied()
                .ok_or_else(|| HypernymError::no_class(wnid))?;
            let node = self
                .arena
                .get_mut(wnid)
                .ok_or_else(|| HypernymError::unknown_node(wnid))?;
            node.descendant_count = 0;
            node.class_num = Some(class_num);
        }
        Ok(())
    }

    /// Phase 3: walk each leaf's parent chain to the root, counting the
    /// leaf once at every ancestor and folding descendant sets upward.
    /// Each leaf's contribution is independent, so leaf order does not
    /// affect the result.
    fn aggregate(&mut self) -> Result<()> {
        let max_steps = self.arena.len();
        for leaf in &self.info.leaf_ids {
            propagate_leaf(&mut self.arena, leaf, max_steps)?;
        }
        Ok(())
    }

    /// Phase 4: drop nodes that neither count a descendant nor carry a
    /// leaf class. These are edge endpoints no tracked leaf ever walked
    /// through.
    fn prune(&mut self) {
        self.arena
            .retain(|_, node| node.descendant_count > 0 || node.class_num.is_some());
    }

    fn verify(&self) -> Result<()> {
        for node in self.arena.values() {
            if node.descendant_count == 0 && node.class_num.is_none() {
                return Err(HypernymError::Integrity(format!(
                    "node '{}' survived pruning with no descendants and no leaf class",
                    node.wnid
                )));
            }
        }
        Ok(())
    }
}

/// One leaf's upward walk. The step budget covers the longest possible
/// acyclic chain, so exceeding it means the edge list looped.
fn propagate_leaf(arena: &mut HashMap<String, Node>, leaf: &str, max_steps: usize) -> Result<()> {
    let mut current = leaf.to_string();
    for _ in 0..=max_steps {
        let Some(node) = arena.get(&current) else {
            return Ok(());
        };
        let Some(parent) = node.parent_wnid.clone() else {
            return Ok(());
        };
        let mut carried = node.descendant_set.clone();
        carried.insert(current.clone());

        let Some(parent_node) = arena.get_mut(&parent) else {
            return Err(HypernymError::Integrity(format!(
                "node '{current}' names parent '{parent}' which is missing from the arena"
            )));
        };
        parent_node.descendant_count += 1;
        parent_node.descendant_set.extend(carried);
        current = parent;
    }
    Err(HypernymError::Integrity(format!(
        "parent chain above '{leaf}' did not terminate within {max_steps} steps; the edge list contains a cycle"
    )))
}
