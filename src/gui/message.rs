//! GUI Message types for the parameter editor
//!
//! All user interactions with the form, the navigation pane and the window
//! are represented as messages.

use crate::editor::WidgetInput;
use crate::param::NodePath;

/// Main message type shared by the editor and tree views
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Form
    // =========================================================================
    /// A control bound to the parameter `key` changed
    WidgetChanged(String, WidgetInput),
    /// Commit the live values
    Accept,
    /// Restore the committed values
    Reset,
    /// Close the confirmation without resolving
    KeepEditing,

    // =========================================================================
    // Navigation
    // =========================================================================
    /// A row of the navigation pane was clicked
    NodeSelected(NodePath),

    // =========================================================================
    // Window
    // =========================================================================
    /// The user asked to close the window
    CloseRequested,
}

/// Notification from an embedded view to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing is left to resolve; the view may be closed
    Dismissed,
}
