//! Navigation pane plus the shared form.

use iced::widget::{column, container, row, scrollable};
use iced::{Element, Length};
use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::editor::Guard;
use crate::gui::editor_view::{dismissed_if_closing, view_footer, view_form};
use crate::gui::message::{Event, Message};
use crate::gui::{theme, widgets};
use crate::param::{Hierarchy, ValueTree};
use crate::tree::{Navigation, ParameterTree};

/// Indentation per hierarchy level in the navigation pane
const INDENT: f32 = 16.0;

/// Embeddable tree editor.
#[derive(Debug, Clone)]
pub struct TreeView {
    tree: ParameterTree,
    config: EditorConfig,
}

impl TreeView {
    pub fn new(hierarchy: Hierarchy, config: EditorConfig) -> Self {
        Self {
            tree: ParameterTree::new(hierarchy),
            config,
        }
    }

    pub fn tree(&self) -> &ParameterTree {
        &self.tree
    }

    pub fn into_tree(self) -> ParameterTree {
        self.tree
    }

    /// Committed values of every leaf
    pub fn values(&self) -> ValueTree {
        self.tree.values()
    }

    pub fn is_dirty(&self) -> bool {
        self.tree.is_dirty()
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::NodeSelected(path) => {
                match self.tree.select(&path) {
                    Ok(Navigation::Blocked) => debug!("Navigation to '{}' deferred", path),
                    Ok(_) => {}
                    Err(e) => warn!("{}", e),
                }
                None
            }
            Message::WidgetChanged(key, input) => {
                if let Err(e) = self.tree.edit(&key, input) {
                    warn!("{}", e);
                }
                None
            }
            Message::Accept => dismissed_if_closing(self.tree.accept()),
            Message::Reset => dismissed_if_closing(self.tree.reset()),
            Message::KeepEditing => {
                self.tree.dismiss_confirmation();
                None
            }
            Message::CloseRequested => match self.tree.request_close() {
                Guard::Proceed => Some(Event::Dismissed),
                Guard::Blocked => None,
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let navigation = container(scrollable(self.view_navigation()))
            .padding(8)
            .width(Length::Fixed(self.config.layout.navigation_width))
            .height(Length::Fill)
            .style(theme::navigation_pane_style);

        row![navigation, self.view_editor()].into()
    }

    fn view_navigation(&self) -> Element<'_, Message> {
        let rows: Vec<Element<'_, Message>> = self
            .tree
            .rows()
            .into_iter()
            .map(|nav| {
                let indent = nav.depth as f32 * INDENT;
                let message = Message::NodeSelected(nav.path);
                if nav.is_leaf {
                    widgets::nav_item(nav.label, nav.selected, indent, message)
                } else {
                    widgets::collapsible_header(nav.label, nav.expanded, indent, message)
                }
            })
            .collect();

        column(rows).spacing(2).into()
    }

    fn view_editor(&self) -> Element<'_, Message> {
        let editor = self.tree.editor();

        let body: Element<'_, Message> = match (self.tree.selected(), self.tree.bound_parameters()) {
            (Some(path), Some(parameters)) if parameters.is_empty() => column![
                widgets::section_header(path.to_string()),
                widgets::info_box("This group has no parameters."),
            ]
            .spacing(12)
            .into(),
            (Some(path), _) => column![
                widgets::section_header(path.to_string()),
                view_form(editor, &self.config.layout),
            ]
            .spacing(12)
            .into(),
            (None, _) => widgets::info_box("Select a group to edit its parameters."),
        };

        column![
            scrollable(container(body).padding(20).width(Length::Fill)).height(Length::Fill),
            view_footer(editor),
        ]
        .width(Length::Fill)
        .into()
    }
}
