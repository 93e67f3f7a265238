//! Parameter items: one named value plus the metadata needed to edit it.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::{ParameterError, Result};

/// A parameter value.
///
/// Choice parameters hold [`Value::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Checkbox state
    Bool(bool),
    /// Bounded integer
    Int(i64),
    /// Free text or selected choice
    Text(String),
}

impl Value {
    /// Name of the contained type, for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Kind tag selecting which control edits a parameter.
///
/// The tags are stable identifiers used by callers and definition files:
///
/// | Tag             | Alias         | Control    |
/// |-----------------|---------------|------------|
/// | `checkbox`      | `QPW_checkbox`| check box  |
/// | `choice`        | `QPW_choice`  | combo box  |
/// | `bounded-index` | `QPW_index`   | spin box   |
/// | `free-text`     | `QPW_default` | line edit  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ParameterKind {
    /// Boolean toggle
    Checkbox,
    /// One string out of an ordered list
    Choice,
    /// Integer within inclusive bounds
    Index,
    /// Free text
    #[default]
    Text,
}

impl ParameterKind {
    pub fn all() -> &'static [ParameterKind] {
        &[
            ParameterKind::Checkbox,
            ParameterKind::Choice,
            ParameterKind::Index,
            ParameterKind::Text,
        ]
    }

    /// Stable string identifier
    pub const fn tag(&self) -> &'static str {
        match self {
            ParameterKind::Checkbox => "checkbox",
            ParameterKind::Choice => "choice",
            ParameterKind::Index => "bounded-index",
            ParameterKind::Text => "free-text",
        }
    }

    const fn legacy_tag(&self) -> &'static str {
        match self {
            ParameterKind::Checkbox => "QPW_checkbox",
            ParameterKind::Choice => "QPW_choice",
            ParameterKind::Index => "QPW_index",
            ParameterKind::Text => "QPW_default",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ParameterKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self> {
        ParameterKind::all()
            .iter()
            .copied()
            .find(|kind| kind.tag() == s || kind.legacy_tag() == s)
            .ok_or_else(|| ParameterError::UnknownKind(s.to_string()))
    }
}

impl TryFrom<String> for ParameterKind {
    type Error = ParameterError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Kind tag together with its kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Checkbox,
    Choice { choices: Vec<String> },
    Index { lo: i64, hi: i64 },
    Text,
}

impl Control {
    pub fn kind(&self) -> ParameterKind {
        match self {
            Control::Checkbox => ParameterKind::Checkbox,
            Control::Choice { .. } => ParameterKind::Choice,
            Control::Index { .. } => ParameterKind::Index,
            Control::Text => ParameterKind::Text,
        }
    }

    /// Check that `value` can be held by a parameter edited with this control.
    fn check(&self, value: &Value) -> Result<()> {
        match (self, value) {
            (Control::Checkbox, Value::Bool(_)) | (Control::Text, Value::Text(_)) => Ok(()),
            (Control::Choice { choices }, Value::Text(s)) => {
                if choices.iter().any(|c| c == s) {
                    Ok(())
                } else {
                    Err(ParameterError::NotAChoice {
                        value: s.clone(),
                        choices: choices.clone(),
                    })
                }
            }
            (Control::Index { lo, hi }, Value::Int(v)) => {
                if v > hi {
                    Err(ParameterError::AboveMaximum { value: *v, hi: *hi })
                } else if v < lo {
                    Err(ParameterError::BelowMinimum { value: *v, lo: *lo })
                } else {
                    Ok(())
                }
            }
            (control, value) => Err(ParameterError::TypeMismatch {
                kind: control.kind(),
                value: value.clone(),
            }),
        }
    }
}

/// Keyword-style options for [`ParameterItem::new`].
#[derive(Debug, Clone, Default)]
pub struct ItemOptions {
    pub widget: ParameterKind,
    pub tooltip: Option<String>,
    pub choices: Option<Vec<String>>,
    pub lo: Option<i64>,
    pub hi: Option<i64>,
}

/// A single editable named value.
///
/// Kind and metadata are fixed at construction. The value changes only when
/// an editor accepts a live widget value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterItem {
    label: String,
    value: Value,
    control: Control,
    tooltip: Option<String>,
}

impl ParameterItem {
    /// Create a parameter from a kind tag and keyword options.
    ///
    /// Metadata that does not apply to the kind is ignored.
    pub fn new(label: impl Into<String>, value: impl Into<Value>, options: ItemOptions) -> Result<Self> {
        let control = match options.widget {
            ParameterKind::Checkbox => Control::Checkbox,
            ParameterKind::Choice => Control::Choice {
                choices: options.choices.ok_or(ParameterError::MissingChoices)?,
            },
            ParameterKind::Index => {
                let hi = options
                    .hi
                    .ok_or(ParameterError::MissingBound("hi", "maximum", 9))?;
                let lo = options
                    .lo
                    .ok_or(ParameterError::MissingBound("lo", "minimum", 0))?;
                if lo > hi {
                    return Err(ParameterError::InvertedBounds { lo, hi });
                }
                Control::Index { lo, hi }
            }
            ParameterKind::Text => Control::Text,
        };

        let value = value.into();
        control.check(&value)?;

        Ok(Self {
            label: label.into(),
            value,
            control,
            tooltip: options.tooltip.filter(|t| !t.is_empty()),
        })
    }

    /// Boolean parameter edited with a check box
    pub fn checkbox(label: impl Into<String>, value: bool) -> Self {
        Self {
            label: label.into(),
            value: Value::Bool(value),
            control: Control::Checkbox,
            tooltip: None,
        }
    }

    /// String parameter picked from `choices`
    pub fn choice<I, S>(label: impl Into<String>, value: impl Into<String>, choices: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            label,
            Value::Text(value.into()),
            ItemOptions {
                widget: ParameterKind::Choice,
                choices: Some(choices.into_iter().map(Into::into).collect()),
                ..Default::default()
            },
        )
    }

    /// Integer parameter within `[lo, hi]`
    pub fn index(label: impl Into<String>, value: i64, lo: i64, hi: i64) -> Result<Self> {
        Self::new(
            label,
            value,
            ItemOptions {
                widget: ParameterKind::Index,
                lo: Some(lo),
                hi: Some(hi),
                ..Default::default()
            },
        )
    }

    /// Free-text parameter
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Value::Text(value.into()),
            control: Control::Text,
            tooltip: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        let tooltip = tooltip.into();
        self.tooltip = (!tooltip.is_empty()).then_some(tooltip);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Last committed value
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn kind(&self) -> ParameterKind {
        self.control.kind()
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Store an accepted value. Returns whether the value changed.
    pub(crate) fn commit(&mut self, value: Value) -> bool {
        if self.value == value {
            return false;
        }
        if let Err(e) = self.control.check(&value) {
            tracing::warn!("Refusing to commit '{}': {}", self.label, e);
            return false;
        }
        self.value = value;
        true
    }
}
