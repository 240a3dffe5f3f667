// src/superclass/selector.rs
//! Greedy ranked selection of superclass nodes.

use std::collections::BTreeSet;

use crate::error::{HypernymError, Result};
use crate::taxonomy::Taxonomy;

/// Optional narrowing of the selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionConstraints {
    /// Only strict descendants of this node are eligible.
    pub ancestor: Option<String>,
    /// Nodes that must not be subdivided further. When one of these
    /// collides with a candidate, the protected node survives.
    pub protected: BTreeSet<String>,
}

/// Outcome of weighing a tentatively accepted candidate against one
/// already in the running list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AncestryVerdict {
    KeepBoth,
    EvictExisting,
    EvictNew,
}

/// Protected nodes win their collisions; otherwise the more specific
/// (descendant) node wins over the coarser (ancestor) one.
fn judge(
    taxonomy: &Taxonomy,
    existing: &str,
    new: &str,
    protected: &BTreeSet<String>,
) -> Result<AncestryVerdict> {
    if taxonomy.is_ancestor(existing, new)? {
        if protected.contains(existing) {
            return Ok(AncestryVerdict::EvictNew);
        }
        return Ok(AncestryVerdict::EvictExisting);
    }
    if taxonomy.is_ancestor(new, existing)? {
        if protected.contains(new) {
            return Ok(AncestryVerdict::EvictExisting);
        }
        return Ok(AncestryVerdict::EvictNew);
    }
    Ok(AncestryVerdict::KeepBoth)
}

/// Picks up to `n` superclass nodes by walking the ranking greedily.
///
/// The survivors form an antichain in the ancestor order: no chosen node
/// contains another. Fewer than `n` come back when the constraints leave
/// too few candidates standing.
///
/// # Errors
/// [`HypernymError::Config`] when a constraint names an unknown node or
/// the protected set overlaps itself.
pub fn select_superclasses(
    taxonomy: &Taxonomy,
    n: usize,
    constraints: &SelectionConstraints,
) -> Result<Vec<String>> {
    validate_constraints(taxonomy, constraints)?;

    let mut accepted: Vec<String> = Vec::new();
    for candidate in taxonomy.ranking() {
        if accepted.len() == n {
            break;
        }
        if let Some(ancestor) = &constraints.ancestor {
            if !taxonomy.is_ancestor(ancestor, &candidate.wnid)? {
                continue;
            }
        }

        // Tentatively accept, then settle every collision with the
        // running list. Survivors keep their insertion order.
        let mut keep_new = true;
        let mut survivors: Vec<String> = Vec::with_capacity(accepted.len() + 1);
        for existing in &accepted {
            match judge(taxonomy, existing, &candidate.wnid, &constraints.protected)? {
                AncestryVerdict::KeepBoth => survivors.push(existing.clone()),
                AncestryVerdict::EvictExisting => {}
                AncestryVerdict::EvictNew => {
                    keep_new = false;
                    survivors.push(existing.clone());
                }
            }
        }
        if keep_new {
            survivors.push(candidate.wnid.clone());
        }
        accepted = survivors;
    }

    Ok(accepted)
}

/// Constraint identifiers must exist, and no protected node may sit above
/// another. Both are configuration mistakes, caught before any selection
/// work runs.
fn validate_constraints(taxonomy: &Taxonomy, constraints: &SelectionConstraints) -> Result<()> {
    if let Some(ancestor) = &constraints.ancestor {
        if !taxonomy.contains(ancestor) {
            return Err(HypernymError::Config(format!(
                "ancestor constraint '{ancestor}' is not in the taxonomy"
            )));
        }
    }
    for wnid in &constraints.protected {
        if !taxonomy.contains(wnid) {
            return Err(HypernymError::Config(format!(
                "protected node '{wnid}' is not in the taxonomy"
            )));
        }
    }
    for s1 in &constraints.protected {
        for s2 in &constraints.protected {
            if taxonomy.is_ancestor(s1, s2)? {
                return Err(HypernymError::Config(format!(
                    "protected nodes overlap: '{s1}' is an ancestor of '{s2}'"
                )));
            }
        }
    }
    Ok(())
}
