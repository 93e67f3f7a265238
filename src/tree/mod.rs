//! Hierarchical parameter tree
//!
//! A [`ParameterTree`] navigates a [`Hierarchy`] and shows the selected leaf's
//! parameters in one shared [`ParameterEditor`]. The editor is rebound, not
//! recreated, on each navigation.
//!
//! # Navigation
//!
//! ```text
//!   NoSelection ──select leaf──▶ LeafBound(clean) ⇄ LeafBound(dirty)
//!                                                        │ select other leaf
//!                                                        ▼
//!                                                    Confirming
//!                          dismiss ◀─────────────────────┤
//!                     (LeafBound, dirty)                 │ Accept / Reset
//!                                                        ▼
//!                                             LeafBound(new path, clean)
//! ```

mod navigation;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::editor::{Guard, ParameterEditor, PendingAction, Resolution, WidgetInput};
use crate::param::{
    Hierarchy, HierarchyNode, NodePath, ParameterError, ParameterSet, Result, ValueMap, ValueTree,
};

pub use navigation::NavRow;

/// Outcome of a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Editor now shows the selected leaf
    Bound,
    /// Binding did not change (branch toggled or same leaf)
    Unchanged,
    /// Unresolved changes; selection stays on the previous leaf
    Blocked,
}

/// Navigable tree of parameter sets with one shared editor.
#[derive(Debug, Clone)]
pub struct ParameterTree {
    hierarchy: Hierarchy,
    selected: Option<NodePath>,
    editor: ParameterEditor,
    collapsed: HashSet<NodePath>,
}

impl ParameterTree {
    /// All branches start expanded and no leaf is selected.
    pub fn new(hierarchy: Hierarchy) -> Self {
        debug!(
            "Parameter tree with {} leaf group(s)",
            hierarchy.leaf_paths().len()
        );
        Self {
            hierarchy,
            selected: None,
            editor: ParameterEditor::default(),
            collapsed: HashSet::new(),
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Give the hierarchy, with all accepted values, back to the caller
    pub fn into_hierarchy(self) -> Hierarchy {
        self.hierarchy
    }

    /// Path of the bound leaf
    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    pub fn editor(&self) -> &ParameterEditor {
        &self.editor
    }

    pub fn bound_parameters(&self) -> Option<&ParameterSet> {
        self.hierarchy.leaf(self.selected.as_ref()?)
    }

    pub fn is_dirty(&self) -> bool {
        self.editor.is_dirty()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.editor.pending()
    }

    /// Handle a selection change in the navigation view.
    ///
    /// Selecting a branch toggles its expansion. Selecting another leaf while
    /// the editor is dirty is blocked and raises the confirmation; while the
    /// confirmation is showing, further selections are ignored.
    pub fn select(&mut self, path: &NodePath) -> Result<Navigation> {
        let node = self
            .hierarchy
            .node(path)
            .ok_or_else(|| ParameterError::UnknownPath(path.to_string()))?;

        if matches!(node, HierarchyNode::Branch(_)) {
            self.toggle_expanded(path);
            return Ok(Navigation::Unchanged);
        }
        if self.selected.as_ref() == Some(path) {
            return Ok(Navigation::Unchanged);
        }
        if self.editor.pending().is_some() {
            debug!("Ignoring selection of '{}' while confirmation is pending", path);
            return Ok(Navigation::Blocked);
        }

        match self.editor.guard(PendingAction::Navigate(path.clone())) {
            Guard::Blocked => Ok(Navigation::Blocked),
            Guard::Proceed => {
                self.bind(path.clone());
                Ok(Navigation::Bound)
            }
        }
    }

    fn bind(&mut self, path: NodePath) {
        let Some(parameters) = self.hierarchy.leaf(&path) else {
            return;
        };
        info!("Showing '{}' ({} parameter(s))", path, parameters.len());
        self.editor.rebind(parameters);
        self.selected = Some(path);
    }

    /// Route a widget change to the shared editor
    pub fn edit(&mut self, key: &str, input: WidgetInput) -> Result<bool> {
        let parameters = self
            .selected
            .as_ref()
            .and_then(|path| self.hierarchy.leaf(path))
            .ok_or_else(|| ParameterError::UnknownKey(key.to_string()))?;
        self.editor.edit(key, input, parameters)
    }

    pub fn accept(&mut self) -> Option<PendingAction> {
        self.resolve(Resolution::Accept)
    }

    pub fn reset(&mut self) -> Option<PendingAction> {
        self.resolve(Resolution::Reset)
    }

    /// Accept or Reset the bound leaf's edits. A deferred navigation is
    /// completed; a deferred close is returned for the caller to carry out.
    pub fn resolve(&mut self, resolution: Resolution) -> Option<PendingAction> {
        let parameters = self
            .selected
            .as_ref()
            .and_then(|path| self.hierarchy.leaf_mut(path))?;
        let action = self.editor.resolve(resolution, parameters);

        if let Some(PendingAction::Navigate(ref path)) = action {
            self.bind(path.clone());
        }
        action
    }

    pub fn request_close(&mut self) -> Guard {
        self.editor.request_close()
    }

    pub fn dismiss_confirmation(&mut self) -> Option<PendingAction> {
        self.editor.dismiss_confirmation()
    }

    /// Committed values of every leaf, shaped like the hierarchy.
    ///
    /// Unaccepted edits in the displayed leaf are not included.
    pub fn values(&self) -> ValueTree {
        self.hierarchy.values()
    }

    /// Live widget values of the displayed leaf
    pub fn live_values(&self) -> Option<ValueMap> {
        self.selected.as_ref().map(|_| self.editor.live_values())
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        !self.collapsed.contains(path)
    }

    pub fn toggle_expanded(&mut self, path: &NodePath) {
        if !self.collapsed.remove(path) {
            self.collapsed.insert(path.clone());
        }
    }
}
