//! # lamco-param-editor
//!
//! Form and tree editors for typed application parameters.
//!
//! # Architecture
//!
//! ```text
//! lamco-param-editor
//!   ├─> param     (ParameterItem, ParameterSet, Hierarchy)
//!   ├─> editor    (widget factory, ParameterEditor, ParameterForm)
//!   ├─> tree      (ParameterTree, navigation rows)
//!   ├─> config    (EditorConfig, definitions files)
//!   └─> gui       (iced views and blocking exec, feature "gui")
//! ```
//!
//! # Data Flow
//!
//! **Construction:** Hierarchy → leaf ParameterSet → EditorWidget per item
//!
//! **Commit:** EditorWidget → ParameterItem value → ValueMap → ValueTree

#![warn(clippy::all)]

/// Parameter data model
pub mod param;

/// Flat parameter editor and widget factory
pub mod editor;

/// Hierarchical parameter tree
pub mod tree;

/// Editor configuration and definitions files
pub mod config;

/// Built-in sample parameters
pub mod sampler;

/// iced front-end
#[cfg(feature = "gui")]
pub mod gui;

pub use editor::{Guard, ParameterEditor, ParameterForm, PendingAction, Resolution, WidgetInput};
pub use param::{
    Hierarchy, NodePath, ParameterError, ParameterItem, ParameterKind, ParameterSet, Value,
    ValueMap, ValueTree,
};
pub use tree::{Navigation, ParameterTree};
