//! Flat parameter editor
//!
//! [`ParameterEditor`] holds one live widget per parameter and decides when the
//! form is dirty. It borrows the parameter set for each operation; the caller
//! keeps ownership of the parameters. [`ParameterForm`] pairs an owned set with
//! an editor for standalone use.
//!
//! # Dirty state
//!
//! ```text
//!   clean ──widget change──▶ dirty
//!     ▲                        │
//!     └──── Accept / Reset ────┘
//! ```
//!
//! Closing (or navigating away, see [`crate::tree`]) while dirty raises a
//! blocking confirmation that only Accept or Reset resolves.

mod form;
pub mod widget;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::param::{NodePath, ParameterError, ParameterSet, Result, ValueMap};

pub use form::ParameterForm;
pub use widget::{EditorWidget, WidgetInput, WidgetState};

/// Outcome of asking whether an action may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Proceed,
    /// Unresolved changes; a confirmation is now pending
    Blocked,
}

/// Action deferred until pending changes are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Close,
    Navigate(NodePath),
}

/// Choice made inside the blocking confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Accept,
    Reset,
}

/// Live widgets for one parameter set, with the dirty flag.
#[derive(Debug, Clone, Default)]
pub struct ParameterEditor {
    widgets: IndexMap<String, EditorWidget>,
    dirty: bool,
    pending: Option<PendingAction>,
}

impl ParameterEditor {
    /// One widget per parameter, in display order. Starts clean.
    pub fn new(parameters: &ParameterSet) -> Self {
        let widgets = parameters
            .iter()
            .map(|(key, item)| (key.clone(), EditorWidget::for_item(item)))
            .collect();
        Self {
            widgets,
            dirty: false,
            pending: None,
        }
    }

    /// Replace the widgets with ones for another parameter set.
    pub fn rebind(&mut self, parameters: &ParameterSet) {
        if self.dirty {
            warn!("Rebinding editor with unresolved changes");
        }
        *self = Self::new(parameters);
    }

    pub fn widgets(&self) -> impl Iterator<Item = (&str, &EditorWidget)> {
        self.widgets.iter().map(|(k, w)| (k.as_str(), w))
    }

    pub fn widget(&self, key: &str) -> Option<&EditorWidget> {
        self.widgets.get(key)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Accept and Reset are only offered while there is something to resolve
    pub fn actions_enabled(&self) -> bool {
        self.dirty
    }

    /// Deferred action waiting on the confirmation, if any
    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Route a change notification to the widget for `key` and recompute the
    /// dirty flag. Returns the new dirty state.
    ///
    /// Edits are ignored while a confirmation is pending.
    pub fn edit(&mut self, key: &str, input: WidgetInput, parameters: &ParameterSet) -> Result<bool> {
        if self.pending.is_some() {
            debug!("Ignoring edit of '{}' while confirmation is pending", key);
            return Ok(self.dirty);
        }
        let widget = self
            .widgets
            .get_mut(key)
            .ok_or_else(|| ParameterError::UnknownKey(key.to_string()))?;
        if widget.apply(input) {
            debug!("'{}' changed to {}", key, widget.live_value());
        }
        self.recompute_dirty(parameters);
        Ok(self.dirty)
    }

    /// A spin box showing text other than its value counts as dirty, so the
    /// text is never dropped without a confirmation.
    fn recompute_dirty(&mut self, parameters: &ParameterSet) {
        self.dirty = self.widgets.iter().any(|(key, widget)| {
            widget.is_intermediate()
                || parameters
                    .get(key)
                    .is_some_and(|item| widget.is_changed(item))
        });
    }

    /// Keys whose live value differs from the committed value, with the live value
    pub fn changed_values(&self, parameters: &ParameterSet) -> ValueMap {
        self.widgets
            .iter()
            .filter(|(key, widget)| parameters.get(key).is_some_and(|item| widget.is_changed(item)))
            .map(|(key, widget)| (key.clone(), widget.live_value()))
            .collect()
    }

    /// Value every widget currently shows
    pub fn live_values(&self) -> ValueMap {
        self.widgets
            .iter()
            .map(|(key, widget)| (key.clone(), widget.live_value()))
            .collect()
    }

    /// Commit every changed widget value into `parameters`.
    ///
    /// Returns the deferred action this resolves, which may now proceed.
    pub fn accept(&mut self, parameters: &mut ParameterSet) -> Option<PendingAction> {
        let mut committed = 0;
        for (key, widget) in self.widgets.iter_mut() {
            let Some(item) = parameters.get_mut(key) else {
                warn!("Parameter '{}' is no longer in the bound set", key);
                continue;
            };
            if item.commit(widget.live_value()) {
                committed += 1;
            }
            widget.normalize();
        }
        info!("Accepted {} changed parameter(s)", committed);
        self.clear()
    }

    /// Restore every widget to its parameter's committed value.
    ///
    /// Returns the deferred action this resolves, which may now proceed.
    pub fn reset(&mut self, parameters: &ParameterSet) -> Option<PendingAction> {
        for (key, widget) in self.widgets.iter_mut() {
            if let Some(item) = parameters.get(key) {
                widget.set_value(item.value());
            }
        }
        if self.dirty {
            info!("Reset {} parameter(s) to committed values", self.widgets.len());
        }
        self.clear()
    }

    fn clear(&mut self) -> Option<PendingAction> {
        self.dirty = false;
        self.pending.take()
    }

    /// Resolve a pending confirmation (or just commit/discard when none is pending)
    pub fn resolve(
        &mut self,
        resolution: Resolution,
        parameters: &mut ParameterSet,
    ) -> Option<PendingAction> {
        match resolution {
            Resolution::Accept => self.accept(parameters),
            Resolution::Reset => self.reset(parameters),
        }
    }

    /// Ask whether `action` may proceed. While dirty the action is deferred and
    /// the blocking confirmation is raised.
    pub fn guard(&mut self, action: PendingAction) -> Guard {
        if self.dirty {
            warn!("{:?} blocked by unresolved changes", action);
            self.pending = Some(action);
            Guard::Blocked
        } else {
            Guard::Proceed
        }
    }

    pub fn request_close(&mut self) -> Guard {
        self.guard(PendingAction::Close)
    }

    /// Close the confirmation and keep editing. Changes stay unresolved and the
    /// deferred action is abandoned; it is returned for the caller's records.
    pub fn dismiss_confirmation(&mut self) -> Option<PendingAction> {
        let action = self.pending.take();
        if let Some(ref action) = action {
            debug!("Confirmation for {:?} dismissed, still dirty", action);
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::{ParameterItem, Value};

    fn parameters() -> ParameterSet {
        ParameterSet::new()
            .with("autoscale", ParameterItem::checkbox("autoscale", true))
            .with(
                "color",
                ParameterItem::choice("color", "", ["", "red", "green", "blue"]).unwrap(),
            )
            .with("points", ParameterItem::index("points", 5, 1, 10).unwrap())
            .with("title", ParameterItem::text("title", "scan"))
    }

    #[test]
    fn test_new_editor_is_clean() {
        let params = parameters();
        let editor = ParameterEditor::new(&params);
        assert!(!editor.is_dirty());
        assert!(!editor.actions_enabled());
        assert_eq!(editor.len(), 4);
        assert_eq!(editor.live_values(), params.values());
        assert!(editor.changed_values(&params).is_empty());
    }

    #[test]
    fn test_edit_back_to_original_is_clean() {
        let params = parameters();
        let mut editor = ParameterEditor::new(&params);
        assert!(editor.edit("points", WidgetInput::Stepped(1), &params).unwrap());
        assert!(!editor.edit("points", WidgetInput::Stepped(-1), &params).unwrap());
    }

    #[test]
    fn test_unknown_key() {
        let params = parameters();
        let mut editor = ParameterEditor::new(&params);
        assert_eq!(
            editor.edit("missing", WidgetInput::Toggled(true), &params),
            Err(ParameterError::UnknownKey("missing".into()))
        );
    }

    #[test]
    fn test_changed_values_only_lists_edits() {
        let params = parameters();
        let mut editor = ParameterEditor::new(&params);
        editor
            .edit("title", WidgetInput::Typed("scan 2".into()), &params)
            .unwrap();
        let changed = editor.changed_values(&params);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed["title"], Value::Text("scan 2".into()));
    }

    #[test]
    fn test_accept_commits_live_values() {
        let mut params = parameters();
        let mut editor = ParameterEditor::new(&params);
        editor.edit("autoscale", WidgetInput::Toggled(false), &params).unwrap();
        editor
            .edit("color", WidgetInput::Selected("green".into()), &params)
            .unwrap();
        let live = editor.live_values();

        assert_eq!(editor.accept(&mut params), None);
        assert!(!editor.is_dirty());
        assert_eq!(params.values(), live);
    }

    #[test]
    fn test_reset_restores_committed_values() {
        let params = parameters();
        let mut editor = ParameterEditor::new(&params);
        editor
            .edit("title", WidgetInput::Typed("other".into()), &params)
            .unwrap();
        editor.edit("points", WidgetInput::Typed("2".into()), &params).unwrap();

        editor.reset(&params);
        assert!(!editor.is_dirty());
        assert_eq!(editor.live_values(), params.values());
        assert!(!editor.widget("points").unwrap().is_intermediate());
    }

    #[test]
    fn test_close_is_blocked_while_dirty() {
        let mut params = parameters();
        let mut editor = ParameterEditor::new(&params);
        assert_eq!(editor.request_close(), Guard::Proceed);

        editor.edit("autoscale", WidgetInput::Toggled(false), &params).unwrap();
        assert_eq!(editor.request_close(), Guard::Blocked);
        assert_eq!(editor.pending(), Some(&PendingAction::Close));

        // modal: edits wait for the confirmation
        editor
            .edit("title", WidgetInput::Typed("ignored".into()), &params)
            .unwrap();
        assert_eq!(editor.live_values()["title"], Value::Text("scan".into()));

        assert_eq!(
            editor.resolve(Resolution::Accept, &mut params),
            Some(PendingAction::Close)
        );
        assert_eq!(editor.request_close(), Guard::Proceed);
        assert_eq!(params.values()["autoscale"], Value::Bool(false));
    }

    #[test]
    fn test_unparsed_spin_text_blocks_close() {
        let params = parameters();
        let mut editor = ParameterEditor::new(&params);

        assert!(editor.edit("points", WidgetInput::Typed("abc".into()), &params).unwrap());
        assert!(editor.actions_enabled());
        assert!(editor.changed_values(&params).is_empty());
        assert_eq!(editor.request_close(), Guard::Blocked);

        assert_eq!(editor.reset(&params), Some(PendingAction::Close));
        assert!(!editor.widget("points").unwrap().is_intermediate());
        assert_eq!(editor.request_close(), Guard::Proceed);
    }

    #[test]
    fn test_accept_reverts_out_of_range_spin_text() {
        let mut params = parameters();
        let mut editor = ParameterEditor::new(&params);
        editor.edit("points", WidgetInput::Typed("8".into()), &params).unwrap();
        // "80" is above the bounds, the spin box keeps 8
        assert!(editor.edit("points", WidgetInput::Typed("80".into()), &params).unwrap());
        assert_eq!(editor.live_values()["points"], Value::Int(8));

        editor.accept(&mut params);
        assert!(!editor.is_dirty());
        assert_eq!(params.values()["points"], Value::Int(8));
        assert_eq!(
            editor.widget("points").unwrap().state(),
            &WidgetState::SpinBox {
                lo: 1,
                hi: 10,
                value: 8,
                buffer: "8".into()
            }
        );
    }

    #[test]
    fn test_dismiss_keeps_changes() {
        let params = parameters();
        let mut editor = ParameterEditor::new(&params);
        editor.edit("autoscale", WidgetInput::Toggled(false), &params).unwrap();
        editor.request_close();

        assert_eq!(editor.dismiss_confirmation(), Some(PendingAction::Close));
        assert!(editor.is_dirty());
        assert!(editor.pending().is_none());
        assert_eq!(editor.live_values()["autoscale"], Value::Bool(false));
    }
}
