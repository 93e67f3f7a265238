//! Standalone form: a parameter set with its own editor.

use crate::param::{ParameterSet, Result, ValueMap};

use super::{EditorWidget, Guard, ParameterEditor, PendingAction, Resolution, WidgetInput};

/// A parameter set edited in one form.
#[derive(Debug, Clone)]
pub struct ParameterForm {
    parameters: ParameterSet,
    editor: ParameterEditor,
}

impl ParameterForm {
    pub fn new(parameters: ParameterSet) -> Self {
        let editor = ParameterEditor::new(&parameters);
        Self { parameters, editor }
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Give the parameters back to the caller
    pub fn into_parameters(self) -> ParameterSet {
        self.parameters
    }

    pub fn editor(&self) -> &ParameterEditor {
        &self.editor
    }

    pub fn widget(&self, key: &str) -> Option<&EditorWidget> {
        self.editor.widget(key)
    }

    pub fn is_dirty(&self) -> bool {
        self.editor.is_dirty()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.editor.pending()
    }

    /// Committed values; unaffected by unaccepted edits
    pub fn values(&self) -> ValueMap {
        self.parameters.values()
    }

    pub fn live_values(&self) -> ValueMap {
        self.editor.live_values()
    }

    pub fn changed_values(&self) -> ValueMap {
        self.editor.changed_values(&self.parameters)
    }

    pub fn edit(&mut self, key: &str, input: WidgetInput) -> Result<bool> {
        self.editor.edit(key, input, &self.parameters)
    }

    pub fn accept(&mut self) -> Option<PendingAction> {
        self.editor.accept(&mut self.parameters)
    }

    pub fn reset(&mut self) -> Option<PendingAction> {
        self.editor.reset(&self.parameters)
    }

    pub fn resolve(&mut self, resolution: Resolution) -> Option<PendingAction> {
        self.editor.resolve(resolution, &mut self.parameters)
    }

    pub fn request_close(&mut self) -> Guard {
        self.editor.request_close()
    }

    pub fn dismiss_confirmation(&mut self) -> Option<PendingAction> {
        self.editor.dismiss_confirmation()
    }
}
