// src/taxonomy/rank.rs
//! Ranked node ordering used by superclass selection.

use std::collections::HashMap;

use crate::taxonomy::node::Node;

/// One taxonomy node's position in the selection ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedNode {
    pub wnid: String,
    /// Dataset leaves at or below the node.
    pub descendant_count: usize,
    /// All known descendants, internal nodes included.
    pub subtree_size: usize,
}

/// Ranks every node by subtree size descending, then descendant count
/// descending. The arena iterates in arbitrary order, so wnid ascending is
/// imposed as the final key to make the ordering reproducible run to run.
///
/// An ancestor's subtree strictly contains each descendant's subtree plus
/// the descendant itself, so ancestors always rank ahead of their own
/// descendants. Selection relies on that.
#[must_use]
pub fn build_ranking(arena: &HashMap<String, Node>) -> Vec<RankedNode> {
    let mut ranking: Vec<RankedNode> = arena
        .values()
        .map(|node| RankedNode {
            wnid: node.wnid.clone(),
            descendant_count: node.descendant_count,
            subtree_size: node.descendant_set.len(),
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.subtree_size
            .cmp(&a.subtree_size)
            .then_with(|| b.descendant_count.cmp(&a.descendant_count))
            .then_with(|| a.wnid.cmp(&b.wnid))
    });

    ranking
}
