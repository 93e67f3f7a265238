//! Parameter definitions files
//!
//! Definitions live under a top-level `parameters` table. A parameter is a
//! table with `label` and `value`; every other table is a group.
//!
//! ```toml
//! [parameters.tiled.server]
//! url = { label = "url", value = "http://localhost:8000" }
//!
//! [parameters.UI.plotting]
//! autoplot = { label = "Autoplot", value = true, widget = "checkbox" }
//! points = { label = "Points", value = 5, widget = "bounded-index", lo = 1, hi = 10 }
//! ```
//!
//! A group whose entries are all parameters is a leaf set, a group of groups
//! is a branch. Groups mixing the two are rejected.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use toml::{Table, Value as TomlValue};

use crate::param::{Hierarchy, HierarchyNode, ItemOptions, ParameterItem, ParameterKind, ParameterSet, Value};

const ROOT_TABLE: &str = "parameters";

/// One parameter as written in a definitions file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDefinition {
    pub label: String,
    pub value: Value,
    #[serde(default)]
    pub widget: ParameterKind,
    pub tooltip: Option<String>,
    pub choices: Option<Vec<String>>,
    pub lo: Option<i64>,
    pub hi: Option<i64>,
}

impl ParameterDefinition {
    /// Validate and build the item
    pub fn into_item(self) -> crate::param::Result<ParameterItem> {
        ParameterItem::new(
            self.label,
            self.value,
            ItemOptions {
                widget: self.widget,
                tooltip: self.tooltip,
                choices: self.choices,
                lo: self.lo,
                hi: self.hi,
            },
        )
    }
}

/// Parse a flat parameter set
pub fn parse_parameter_set(content: &str) -> Result<ParameterSet> {
    let root = root_table(content)?;
    parse_set(root, ROOT_TABLE)
}

/// Parse a parameter hierarchy
pub fn parse_hierarchy(content: &str) -> Result<Hierarchy> {
    let root = root_table(content)?;
    if !root.is_empty() && is_parameter_group(&root) {
        anyhow::bail!("'{}' holds parameters directly; expected groups", ROOT_TABLE);
    }
    parse_branch(root, ROOT_TABLE)
}

/// Load a flat parameter set from file
pub fn load_parameter_set(path: impl AsRef<Path>) -> Result<ParameterSet> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definitions file: {}", path.display()))?;
    parse_parameter_set(&content)
        .with_context(|| format!("Invalid definitions file: {}", path.display()))
}

/// Load a parameter hierarchy from file
pub fn load_hierarchy(path: impl AsRef<Path>) -> Result<Hierarchy> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definitions file: {}", path.display()))?;
    parse_hierarchy(&content).with_context(|| format!("Invalid definitions file: {}", path.display()))
}

fn root_table(content: &str) -> Result<Table> {
    let mut document: Table = toml::from_str(content).context("Failed to parse definitions")?;
    match document.remove(ROOT_TABLE) {
        Some(TomlValue::Table(table)) => Ok(table),
        Some(other) => anyhow::bail!("'{}' must be a table, found {}", ROOT_TABLE, other.type_str()),
        None => anyhow::bail!("Missing '[{}]' table", ROOT_TABLE),
    }
}

fn is_definition(value: &TomlValue) -> bool {
    value
        .as_table()
        .is_some_and(|t| t.contains_key("label") && t.contains_key("value"))
}

/// Empty groups count as (empty) parameter sets
fn is_parameter_group(table: &Table) -> bool {
    table.values().all(is_definition)
}

fn parse_set(table: Table, path: &str) -> Result<ParameterSet> {
    let mut parameters = ParameterSet::new();
    for (key, value) in table {
        if !is_definition(&value) {
            anyhow::bail!("'{}.{}' is not a parameter definition", path, key);
        }
        let definition: ParameterDefinition = value
            .try_into()
            .with_context(|| format!("Invalid parameter '{}.{}'", path, key))?;
        let item = definition
            .into_item()
            .with_context(|| format!("Invalid parameter '{}.{}'", path, key))?;
        parameters.insert(key, item);
    }
    Ok(parameters)
}

fn parse_branch(table: Table, path: &str) -> Result<Hierarchy> {
    let mut hierarchy = Hierarchy::new();
    for (key, value) in table {
        let child_path = format!("{}.{}", path, key);
        let TomlValue::Table(child) = value else {
            anyhow::bail!("'{}' must be a table, found {}", child_path, value.type_str());
        };
        hierarchy.insert(key, parse_node(child, &child_path)?);
    }
    Ok(hierarchy)
}

fn parse_node(table: Table, path: &str) -> Result<HierarchyNode> {
    let definitions = table.values().filter(|v| is_definition(v)).count();
    if definitions == table.len() {
        Ok(HierarchyNode::Leaf(parse_set(table, path)?))
    } else if definitions == 0 {
        Ok(HierarchyNode::Branch(parse_branch(table, path)?))
    } else {
        anyhow::bail!("'{}' mixes parameters and groups", path)
    }
}
