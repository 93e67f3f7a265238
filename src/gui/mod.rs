//! Editor GUI built on iced's Elm Architecture.
//!
//! [`EditorView`] and [`TreeView`] are embeddable components: a host
//! application forwards [`Message`]s to their `update` and stops showing them
//! on [`Event::Dismissed`]. [`exec_editor`] and [`exec_tree`] run either one
//! as a dedicated application and block until the window is dismissed.

pub mod app;
pub mod editor_view;
pub mod message;
pub mod theme;
pub mod tree_view;
pub mod widgets;

pub use app::{exec_editor, exec_tree};
pub use editor_view::EditorView;
pub use message::{Event, Message};
pub use tree_view::TreeView;
