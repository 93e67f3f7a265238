//! Widget factory: live control state for each parameter kind.
//!
//! The factory is a pure mapping from a [`ParameterItem`] to a fresh
//! [`EditorWidget`]. Rendering lives in the GUI layer; this module only holds
//! the value each control currently displays.

use tracing::debug;

use crate::param::{Control, ParameterItem, Value};

/// Change notification emitted by a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetInput {
    /// Check box toggled
    Toggled(bool),
    /// Combo box entry selected
    Selected(String),
    /// Spin box arrow pressed
    Stepped(i64),
    /// Text typed into a line edit or spin box
    Typed(String),
}

/// Live state of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    CheckBox {
        checked: bool,
    },
    ComboBox {
        choices: Vec<String>,
        selected: String,
    },
    /// `buffer` holds the typed text; it can be an intermediate entry that
    /// does not parse or lies outside the bounds while the user is typing.
    SpinBox {
        lo: i64,
        hi: i64,
        value: i64,
        buffer: String,
    },
    LineEdit {
        text: String,
    },
}

/// A control bound to one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorWidget {
    label: String,
    tooltip: Option<String>,
    state: WidgetState,
}

impl EditorWidget {
    /// Build the control for `item`, populated with its committed value.
    pub fn for_item(item: &ParameterItem) -> Self {
        let value = item.value();
        let state = match item.control() {
            Control::Checkbox => WidgetState::CheckBox {
                checked: value.as_bool().unwrap_or_default(),
            },
            Control::Choice { choices } => WidgetState::ComboBox {
                choices: choices.clone(),
                selected: value.as_str().unwrap_or_default().to_string(),
            },
            Control::Index { lo, hi } => {
                let value = value.as_int().unwrap_or(*lo).clamp(*lo, *hi);
                WidgetState::SpinBox {
                    lo: *lo,
                    hi: *hi,
                    value,
                    buffer: value.to_string(),
                }
            }
            Control::Text => WidgetState::LineEdit {
                text: value.as_str().unwrap_or_default().to_string(),
            },
        };

        Self {
            label: item.label().to_string(),
            tooltip: item.tooltip().map(str::to_string),
            state,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Value the control currently shows, converted to the parameter's type
    pub fn live_value(&self) -> Value {
        match &self.state {
            WidgetState::CheckBox { checked } => Value::Bool(*checked),
            WidgetState::ComboBox { selected, .. } => Value::Text(selected.clone()),
            WidgetState::SpinBox { value, .. } => Value::Int(*value),
            WidgetState::LineEdit { text } => Value::Text(text.clone()),
        }
    }

    /// True when the live value differs from the item's committed value
    pub fn is_changed(&self, item: &ParameterItem) -> bool {
        self.live_value() != *item.value()
    }

    /// True while a spin box shows text that is not its value
    pub fn is_intermediate(&self) -> bool {
        match &self.state {
            WidgetState::SpinBox { value, buffer, .. } => *buffer != value.to_string(),
            _ => false,
        }
    }

    /// Overwrite the displayed value. Mismatched values are ignored.
    pub fn set_value(&mut self, value: &Value) {
        match (&mut self.state, value) {
            (WidgetState::CheckBox { checked }, Value::Bool(b)) => *checked = *b,
            (WidgetState::ComboBox { choices, selected }, Value::Text(s)) => {
                if choices.contains(s) {
                    *selected = s.clone();
                }
            }
            (WidgetState::SpinBox { lo, hi, value, buffer }, Value::Int(v)) => {
                *value = (*v).clamp(*lo, *hi);
                *buffer = value.to_string();
            }
            (WidgetState::LineEdit { text }, Value::Text(s)) => *text = s.clone(),
            (_, value) => {
                debug!("Ignoring {} value for '{}'", value.type_name(), self.label);
            }
        }
    }

    /// Apply a change notification. Returns whether the live value changed.
    ///
    /// Inputs that do not fit the control are ignored.
    pub fn apply(&mut self, input: WidgetInput) -> bool {
        let before = self.live_value();
        match (&mut self.state, input) {
            (WidgetState::CheckBox { checked }, WidgetInput::Toggled(b)) => *checked = b,
            (WidgetState::ComboBox { choices, selected }, WidgetInput::Selected(s)) => {
                if choices.contains(&s) {
                    *selected = s;
                } else {
                    debug!("'{}' is not a choice for '{}'", s, self.label);
                }
            }
            (WidgetState::SpinBox { lo, hi, value, buffer }, WidgetInput::Stepped(delta)) => {
                *value = value.saturating_add(delta).clamp(*lo, *hi);
                *buffer = value.to_string();
            }
            (WidgetState::SpinBox { lo, hi, value, buffer }, WidgetInput::Typed(s)) => {
                if let Ok(n) = s.trim().parse::<i64>() {
                    if (*lo..=*hi).contains(&n) {
                        *value = n;
                    }
                }
                *buffer = s;
            }
            (WidgetState::LineEdit { text }, WidgetInput::Typed(s)) => *text = s,
            (_, input) => {
                debug!("Ignoring {:?} for '{}'", input, self.label);
            }
        }
        self.live_value() != before
    }

    /// Drop any intermediate spin box text
    pub(crate) fn normalize(&mut self) {
        if let WidgetState::SpinBox { value, buffer, .. } = &mut self.state {
            *buffer = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_matches_kind() {
        let widget = EditorWidget::for_item(&ParameterItem::checkbox("autoscale", true));
        assert_eq!(widget.state(), &WidgetState::CheckBox { checked: true });

        let widget = EditorWidget::for_item(
            &ParameterItem::choice("color", "", ["", "red"]).unwrap().with_tooltip("Line color"),
        );
        assert!(matches!(widget.state(), WidgetState::ComboBox { selected, .. } if selected.is_empty()));
        assert_eq!(widget.tooltip(), Some("Line color"));

        let widget = EditorWidget::for_item(&ParameterItem::index("n", 3, 0, 9).unwrap());
        assert_eq!(
            widget.state(),
            &WidgetState::SpinBox {
                lo: 0,
                hi: 9,
                value: 3,
                buffer: "3".into()
            }
        );

        let widget = EditorWidget::for_item(&ParameterItem::text("url", "http://localhost"));
        assert_eq!(widget.live_value(), Value::Text("http://localhost".into()));
        assert_eq!(widget.label(), "url");
    }

    #[test]
    fn test_spin_box_clamps_steps() {
        let mut widget = EditorWidget::for_item(&ParameterItem::index("n", 8, 0, 9).unwrap());
        assert!(widget.apply(WidgetInput::Stepped(5)));
        assert_eq!(widget.live_value(), Value::Int(9));
        assert!(!widget.apply(WidgetInput::Stepped(1)));
        assert!(widget.apply(WidgetInput::Stepped(-100)));
        assert_eq!(widget.live_value(), Value::Int(0));
    }

    #[test]
    fn test_spin_box_typing() {
        let mut widget = EditorWidget::for_item(&ParameterItem::index("n", 20, 10, 99).unwrap());

        // "1" on the way to "15" is below the bounds: buffer only
        assert!(!widget.apply(WidgetInput::Typed("1".into())));
        assert!(widget.is_intermediate());
        assert_eq!(widget.live_value(), Value::Int(20));

        assert!(widget.apply(WidgetInput::Typed("15".into())));
        assert!(!widget.is_intermediate());
        assert_eq!(widget.live_value(), Value::Int(15));

        assert!(!widget.apply(WidgetInput::Typed("abc".into())));
        assert_eq!(widget.live_value(), Value::Int(15));
        widget.normalize();
        assert!(!widget.is_intermediate());
    }

    #[test]
    fn test_combo_box_ignores_unknown_choice() {
        let mut widget =
            EditorWidget::for_item(&ParameterItem::choice("color", "red", ["red", "green"]).unwrap());
        assert!(!widget.apply(WidgetInput::Selected("purple".into())));
        assert!(widget.apply(WidgetInput::Selected("green".into())));
        assert_eq!(widget.live_value(), Value::Text("green".into()));
    }

    #[test]
    fn test_mismatched_input_is_ignored() {
        let mut widget = EditorWidget::for_item(&ParameterItem::checkbox("autoscale", false));
        assert!(!widget.apply(WidgetInput::Typed("true".into())));
        widget.set_value(&Value::Int(1));
        assert_eq!(widget.live_value(), Value::Bool(false));
    }
}
