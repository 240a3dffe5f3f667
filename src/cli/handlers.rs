// src/cli/handlers.rs
//! Command handlers bridging the CLI surface to the library.

use std::collections::BTreeSet;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::reporting;
use crate::superclass::{self, SelectionConstraints};
use crate::taxonomy::{self, Taxonomy};

#[derive(Debug, Clone)]
pub struct PartitionArgs {
    pub n: usize,
    pub ancestor: Option<String>,
    pub protect: Vec<String>,
    pub no_balance: bool,
    pub json: bool,
}

/// Handles the partition command.
///
/// # Errors
/// Returns error if taxonomy construction, selection or grouping fails.
pub fn handle_partition(config: &Config, args: &PartitionArgs) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    let constraints = SelectionConstraints {
        ancestor: args.ancestor.clone(),
        protected: args.protect.iter().cloned().collect::<BTreeSet<_>>(),
    };
    let balanced = config.balanced && !args.no_balance;
    let partition = superclass::partition(&taxonomy, args.n, &constraints, balanced)?;

    if args.json {
        reporting::print_json(&partition)?;
    } else {
        reporting::print_partition(&taxonomy, &partition, config.verbose);
    }
    Ok(())
}

/// Handles the group command. The registry name is resolved before the
/// taxonomy is built, so a typo fails fast.
///
/// # Errors
/// Returns error for an unknown registry name or a grouping failure.
pub fn handle_group(config: &Config, name: &str, no_balance: bool, json: bool) -> Result<()> {
    let superclasses = superclass::common_superclasses(name)?;
    let taxonomy = load_taxonomy(config)?;
    let balanced = config.balanced && !no_balance;
    let partition = superclass::group_subclasses(&taxonomy, &superclasses, balanced)?;

    if json {
        reporting::print_json(&partition)?;
    } else {
        reporting::print_partition(&taxonomy, &partition, config.verbose);
    }
    Ok(())
}

/// Handles the info command.
///
/// # Errors
/// Returns error if the node is unknown or construction fails.
pub fn handle_info(config: &Config, wnid: &str) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    let node = taxonomy.node(wnid)?;
    reporting::print_node(node);
    Ok(())
}

fn load_taxonomy(config: &Config) -> Result<Taxonomy> {
    let (root, info) = config.require_paths()?;
    taxonomy::load(root, info, &config.split)
        .with_context(|| format!("failed to build taxonomy from {}", info.display()))
}
