//! Flattened rows for the navigation view.

use crate::param::{Hierarchy, HierarchyNode, NodePath};

use super::ParameterTree;

/// One visible line of the navigation view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow {
    pub path: NodePath,
    pub label: String,
    /// Indentation level; top-level nodes are 0
    pub depth: usize,
    pub is_leaf: bool,
    pub expanded: bool,
    pub selected: bool,
}

impl ParameterTree {
    /// Visible rows in display order; children of collapsed branches are skipped.
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        self.push_rows(self.hierarchy(), &NodePath::root(), &mut rows);
        rows
    }

    fn push_rows(&self, branch: &Hierarchy, prefix: &NodePath, rows: &mut Vec<NavRow>) {
        for (key, node) in branch {
            let path = prefix.child(key.as_str());
            let expanded = self.is_expanded(&path);
            rows.push(NavRow {
                label: key.clone(),
                depth: prefix.depth(),
                is_leaf: node.is_leaf(),
                expanded,
                selected: self.selected() == Some(&path),
                path: path.clone(),
            });
            if let HierarchyNode::Branch(children) = node {
                if expanded {
                    self.push_rows(children, &path, rows);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::param::{Hierarchy, NodePath, ParameterItem, ParameterSet};
    use crate::tree::ParameterTree;

    fn tree() -> ParameterTree {
        ParameterTree::new(
            Hierarchy::new()
                .with_branch(
                    "tiled",
                    Hierarchy::new().with_leaf(
                        "server",
                        ParameterSet::new().with("url", ParameterItem::text("url", "http://localhost")),
                    ),
                )
                .with_branch(
                    "UI",
                    Hierarchy::new().with_leaf(
                        "plotting",
                        ParameterSet::new().with("autoplot", ParameterItem::checkbox("autoplot", true)),
                    ),
                ),
        )
    }

    #[test]
    fn test_rows_mirror_hierarchy() {
        let rows = tree().rows();
        let labels: Vec<_> = rows.iter().map(|r| (r.label.as_str(), r.depth, r.is_leaf)).collect();
        assert_eq!(
            labels,
            [
                ("tiled", 0, false),
                ("server", 1, true),
                ("UI", 0, false),
                ("plotting", 1, true)
            ]
        );
    }

    #[test]
    fn test_collapsed_branch_hides_children() {
        let mut tree = tree();
        tree.toggle_expanded(&NodePath::from(["tiled"]));
        let rows = tree.rows();
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_selected_row_is_marked() {
        let mut tree = tree();
        tree.select(&NodePath::from(["UI", "plotting"])).unwrap();
        let selected: Vec<_> = tree.rows().into_iter().filter(|r| r.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, NodePath::from(["UI", "plotting"]));
    }
}
