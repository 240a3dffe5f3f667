// src/sources.rs
//! Loading of the read-only dataset tables the hierarchy is built from.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{HypernymError, Result};

/// Tab-delimited wnid→name table under the info directory.
pub const WORDS_FILE: &str = "words.txt";
/// Space-delimited parent→child edge list under the info directory.
pub const IS_A_FILE: &str = "wordnet.is_a.txt";
/// Leaf-class index JSON under the info directory.
pub const CLASS_INDEX_FILE: &str = "imagenet_class_index.json";

/// A parent→child pair from the is-a edge list.
pub type Edge = (String, String);

static WNID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^n[0-9]{8}$").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Leaf-class-number correspondence parsed from the class-index JSON.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    /// wnid → leaf-class number.
    pub class_of: HashMap<String, u32>,
    /// Leaf-class number → short display name.
    pub short_names: HashMap<u32, String>,
}

/// The raw tables construction consumes. Edges travel separately since the
/// builder ingests them as a stream rather than a lookup table.
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    /// Leaf wnids actually present in the dataset split.
    pub leaf_ids: BTreeSet<String>,
    /// wnid → human-readable synset name.
    pub names: HashMap<String, String>,
    pub class_index: ClassIndex,
}

/// Lists the leaf-category directories of a dataset split. Only entries
/// shaped like a wnid count; stray files or helper directories under the
/// split are ignored.
///
/// # Errors
/// [`HypernymError::Io`] if the split directory cannot be read.
pub fn list_leaf_dirs(split_dir: &Path) -> Result<BTreeSet<String>> {
    let mut leaf_ids = BTreeSet::new();
    for entry in WalkDir::new(split_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HypernymError::Io {
            source: e.into(),
            path: split_dir.to_path_buf(),
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if WNID_RE.is_match(&name) {
            leaf_ids.insert(name.into_owned());
        }
    }
    Ok(leaf_ids)
}

/// Loads the wnid→name table. Each line carries a wnid and a name separated
/// by a tab; anything after a second tab is ignored.
pub fn load_names(path: &Path) -> Result<HashMap<String, String>> {
    let content = read_file(path)?;
    let mut names = HashMap::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(wnid), Some(name)) = (fields.next(), fields.next()) else {
            return Err(HypernymError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: "expected '<wnid>\\t<name>'".to_string(),
            });
        };
        names.insert(wnid.to_string(), name.to_string());
    }
    Ok(names)
}

/// Loads the leaf-class index: a JSON object mapping `"<class number>"` to
/// a `["<wnid>", "<short name>"]` pair.
pub fn load_class_index(path: &Path) -> Result<ClassIndex> {
    let content = read_file(path)?;
    let raw: HashMap<String, (String, String)> =
        serde_json::from_str(&content).map_err(|e| HypernymError::Parse {
            path: path.to_path_buf(),
            line: e.line(),
            message: e.to_string(),
        })?;

    let mut index = ClassIndex::default();
    for (key, (wnid, short_name)) in raw {
        let class_num: u32 = key.parse().map_err(|_| HypernymError::Parse {
            path: path.to_path_buf(),
            line: 0,
            message: format!("class key '{key}' is not an integer"),
        })?;
        index.class_of.insert(wnid, class_num);
        index.short_names.insert(class_num, short_name);
    }
    Ok(index)
}

/// Loads the parent→child edge list. Blank lines are skipped; every other
/// line must hold exactly two whitespace-separated wnids.
pub fn load_edges(path: &Path) -> Result<Vec<Edge>> {
    let content = read_file(path)?;
    let mut edges = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[parent, child] = fields.as_slice() else {
            return Err(HypernymError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("expected '<parent> <child>', found {} fields", fields.len()),
            });
        };
        edges.push((parent.to_string(), child.to_string()));
    }
    Ok(edges)
}

/// Gathers all construction tables for a dataset laid out as
/// `<root>/<split>/<wnid>/...` plus an info directory holding the metadata
/// files. The edge list is loaded separately via [`load_edges`].
pub fn load_dataset_info(root: &Path, info_dir: &Path, split: &str) -> Result<DatasetInfo> {
    let leaf_ids = list_leaf_dirs(&root.join(split))?;
    let names = load_names(&info_dir.join(WORDS_FILE))?;
    let class_index = load_class_index(&info_dir.join(CLASS_INDEX_FILE))?;
    Ok(DatasetInfo {
        leaf_ids,
        names,
        class_index,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| HypernymError::Io {
        source: e,
        path: path.to_path_buf(),
    })
}
