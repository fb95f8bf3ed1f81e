use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Parse a locale JSON file into its document tree.
///
/// Translation bundles are object trees keyed by message name, so a
/// non-object root is rejected.
pub fn parse_json_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    if !json.is_object() {
        bail!("Expected a JSON object at the root of {:?}", path);
    }

    Ok(json)
}

/// Count the leaf values in a document tree.
///
/// Only objects recurse; any other value is one leaf. `null`, `false`,
/// `0`, and `""` are leaves like every other terminal value: whether a
/// node is a mapping is the only thing that decides leaf-vs-branch.
pub fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        _ => 1,
    }
}

/// Collect the dot-delimited path of every leaf in a document tree.
///
/// Visits the same leaves `count_leaves` counts, so
/// `leaf_key_paths(v).len() == count_leaves(v)` for any document.
pub fn leaf_key_paths(value: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect_leaf_paths(value, String::new(), &mut paths);
    paths
}

fn collect_leaf_paths(value: &Value, prefix: String, paths: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let full_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaf_paths(val, full_key, paths);
            }
        }
        _ => {
            paths.insert(prefix);
        }
    }
}
