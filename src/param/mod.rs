//! Parameter data model
//!
//! A [`ParameterItem`] is one named, typed value with the metadata needed to
//! edit it. Items are grouped into ordered [`ParameterSet`]s, and sets into
//! [`Hierarchy`] trees for navigation.

pub mod error;
pub mod hierarchy;
pub mod item;
pub mod set;

pub use error::{ParameterError, Result};
pub use hierarchy::{Hierarchy, HierarchyNode, NodePath, ValueTree};
pub use item::{Control, ItemOptions, ParameterItem, ParameterKind, Value};
pub use set::{ParameterSet, ValueMap};
