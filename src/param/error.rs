//! Parameter Error Types
//!
//! Errors raised while defining parameters or addressing them in an editor.

use thiserror::Error;

use super::item::{ParameterKind, Value};

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, ParameterError>;

/// Parameter module error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Choice kind declared without a choice list
    #[error("Must provide a list of choices, example: 'choices = [\"one\", \"two\"]'")]
    MissingChoices,

    /// Choice value is not one of the declared choices
    #[error("Received 'value={value:?}' which is not one of the choices {choices:?}")]
    NotAChoice {
        /// Rejected value
        value: String,
        /// Declared choices
        choices: Vec<String>,
    },

    /// Bounded-index kind declared without one of its bounds
    #[error("Must provide {0} ({1} value), example: '{0}={2}'")]
    MissingBound(&'static str, &'static str, i64),

    /// Lower bound is greater than the upper bound
    #[error("Received 'lo={lo}' which is greater than 'hi={hi}'")]
    InvertedBounds {
        /// Lower bound
        lo: i64,
        /// Upper bound
        hi: i64,
    },

    /// Initial value above the upper bound
    #[error("Received 'value={value}'. Cannot be greater than: hi={hi}")]
    AboveMaximum {
        /// Rejected value
        value: i64,
        /// Upper bound
        hi: i64,
    },

    /// Initial value below the lower bound
    #[error("Received 'value={value}'. Cannot be less than: lo={lo}")]
    BelowMinimum {
        /// Rejected value
        value: i64,
        /// Lower bound
        lo: i64,
    },

    /// Initial value has the wrong type for the kind
    #[error("A {kind} parameter cannot hold a {} value ({value})", .value.type_name())]
    TypeMismatch {
        /// Declared kind
        kind: ParameterKind,
        /// Rejected value
        value: Value,
    },

    /// Kind tag not recognized
    #[error("Received 'widget={0:?}'. Must be one of: checkbox, choice, bounded-index, free-text")]
    UnknownKind(String),

    /// Key not present in the bound parameter set
    #[error("No parameter with key '{0}'")]
    UnknownKey(String),

    /// Path not present in the hierarchy
    #[error("No hierarchy node at '{0}'")]
    UnknownPath(String),
}
