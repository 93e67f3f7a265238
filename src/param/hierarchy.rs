//! Hierarchies of parameter sets for tree navigation.

use std::fmt;

use indexmap::IndexMap;

use super::set::{ParameterSet, ValueMap};

/// Keys from the hierarchy root down to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a direct child
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = self.0.clone();
        keys.push(key.into());
        Self(keys)
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Number of keys; top-level nodes have depth 1
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// True when `self` is a strict ancestor of `other`
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" / "))
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for NodePath {
    fn from(keys: [S; N]) -> Self {
        keys.into_iter().collect()
    }
}

/// A node below a hierarchy mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyNode {
    /// Nested mapping
    Branch(Hierarchy),
    /// Parameters edited together in one form
    Leaf(ParameterSet),
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, HierarchyNode::Leaf(_))
    }
}

/// Nested mapping whose leaves are parameter sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    nodes: IndexMap<String, HierarchyNode>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, key: impl Into<String>, branch: Hierarchy) -> Self {
        self.insert(key, HierarchyNode::Branch(branch));
        self
    }

    pub fn with_leaf(mut self, key: impl Into<String>, parameters: ParameterSet) -> Self {
        self.insert(key, HierarchyNode::Leaf(parameters));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, node: HierarchyNode) -> Option<HierarchyNode> {
        self.nodes.insert(key.into(), node)
    }

    pub fn get(&self, key: &str) -> Option<&HierarchyNode> {
        self.nodes.get(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, HierarchyNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `path`; `None` for the root path or a missing node
    pub fn node(&self, path: &NodePath) -> Option<&HierarchyNode> {
        let (first, rest) = path.keys().split_first()?;
        rest.iter().try_fold(self.nodes.get(first)?, |node, key| match node {
            HierarchyNode::Branch(branch) => branch.nodes.get(key),
            HierarchyNode::Leaf(_) => None,
        })
    }

    /// Parameter set at `path`, if that node is a leaf
    pub fn leaf(&self, path: &NodePath) -> Option<&ParameterSet> {
        match self.node(path)? {
            HierarchyNode::Leaf(parameters) => Some(parameters),
            HierarchyNode::Branch(_) => None,
        }
    }

    pub(crate) fn leaf_mut(&mut self, path: &NodePath) -> Option<&mut ParameterSet> {
        let (first, rest) = path.keys().split_first()?;
        let mut node = self.nodes.get_mut(first)?;
        for key in rest {
            node = match node {
                HierarchyNode::Branch(branch) => branch.nodes.get_mut(key)?,
                HierarchyNode::Leaf(_) => return None,
            };
        }
        match node {
            HierarchyNode::Leaf(parameters) => Some(parameters),
            HierarchyNode::Branch(_) => None,
        }
    }

    /// Paths of every leaf, depth first in display order
    pub fn leaf_paths(&self) -> Vec<NodePath> {
        let mut paths = Vec::new();
        self.collect_leaf_paths(&NodePath::root(), &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, prefix: &NodePath, paths: &mut Vec<NodePath>) {
        for (key, node) in &self.nodes {
            let path = prefix.child(key.as_str());
            match node {
                HierarchyNode::Branch(branch) => branch.collect_leaf_paths(&path, paths),
                HierarchyNode::Leaf(_) => paths.push(path),
            }
        }
    }

    /// Same shape with each parameter set replaced by its committed values
    pub fn values(&self) -> ValueTree {
        ValueTree::Branch(
            self.nodes
                .iter()
                .map(|(key, node)| {
                    let values = match node {
                        HierarchyNode::Branch(branch) => branch.values(),
                        HierarchyNode::Leaf(parameters) => ValueTree::Leaf(parameters.values()),
                    };
                    (key.clone(), values)
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Hierarchy {
    type Item = (&'a String, &'a HierarchyNode);
    type IntoIter = indexmap::map::Iter<'a, String, HierarchyNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Values of a hierarchy, shaped like the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTree {
    Branch(IndexMap<String, ValueTree>),
    Leaf(ValueMap),
}

impl ValueTree {
    pub fn get(&self, key: &str) -> Option<&ValueTree> {
        match self {
            ValueTree::Branch(children) => children.get(key),
            ValueTree::Leaf(_) => None,
        }
    }

    /// Values of the leaf at `path`
    pub fn leaf(&self, path: &NodePath) -> Option<&ValueMap> {
        let node = path
            .keys()
            .iter()
            .try_fold(self, |node, key| node.get(key))?;
        match node {
            ValueTree::Leaf(values) => Some(values),
            ValueTree::Branch(_) => None,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            ValueTree::Branch(children) => {
                for (key, child) in children {
                    writeln!(f, "{}{}:", indent, key)?;
                    child.write_indented(f, depth + 1)?;
                }
            }
            ValueTree::Leaf(values) => {
                for (key, value) in values {
                    writeln!(f, "{}{} = {}", indent, key, value)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ValueTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
