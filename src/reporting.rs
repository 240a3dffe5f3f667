// src/reporting.rs
//! Console output formatting for partitions and node queries.

use anyhow::Result;
use colored::Colorize;

use crate::superclass::Partition;
use crate::taxonomy::{Node, Taxonomy};

/// Prints a partition: one line per superclass, then a coverage summary.
/// Verbose mode lists every member class with its short name.
pub fn print_partition(taxonomy: &Taxonomy, partition: &Partition, verbose: bool) {
    if partition.is_empty() {
        println!("{}", "no superclasses selected".yellow());
        return;
    }

    let groups = partition.superclasses.iter().zip(&partition.class_ranges);
    for (idx, (wnid, classes)) in groups.enumerate() {
        let label = partition.labels.get(&idx).map_or("?", String::as_str);
        println!(
            "{:>3}  {}  {}  {} classes",
            idx,
            wnid.dimmed(),
            label.cyan().bold(),
            classes.len()
        );
        if verbose {
            for class in classes {
                let short = taxonomy.short_name(*class).unwrap_or("?");
                println!("      {}  {short}", format!("{class:>5}").dimmed());
            }
        }
    }

    println!(
        "{} {} superclasses covering {} of {} leaf classes",
        "OK".green().bold(),
        partition.len(),
        partition.covered_classes(),
        taxonomy.leaf_class_count()
    );
}

/// Prints one node's identity and aggregates.
pub fn print_node(node: &Node) {
    println!("{}", node.wnid.cyan().bold());
    println!("  {node}");
    match &node.parent_wnid {
        Some(parent) => println!("  Parent: {parent}"),
        None => println!("  Parent: {}", "none (root)".dimmed()),
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
