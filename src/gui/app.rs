//! Standalone iced applications for the editor and the tree
//!
//! Implements the Elm Architecture pattern: State -> View -> Message -> Update -> State.
//! `exec_*` blocks until the window is dismissed and hands back the committed
//! values.

use std::sync::Arc;

use iced::window;
use iced::{Element, Size, Subscription, Task};
use parking_lot::Mutex;
use tracing::info;

use crate::config::EditorConfig;
use crate::gui::editor_view::EditorView;
use crate::gui::message::{Event, Message};
use crate::gui::tree_view::TreeView;
use crate::param::{Hierarchy, ParameterSet, ValueMap, ValueTree};

/// Values written by the application right before it exits
type ResultSlot<T> = Arc<Mutex<Option<T>>>;

fn window_settings(config: &EditorConfig) -> window::Settings {
    window::Settings {
        size: Size::new(config.window.width, config.window.height),
        position: window::Position::Centered,
        // close requests go through the dirty check first
        exit_on_close_request: false,
        ..Default::default()
    }
}

fn title_for(config: &EditorConfig, dirty: bool) -> String {
    let dirty_indicator = if dirty { " *" } else { "" };
    format!("{}{}", config.window.title, dirty_indicator)
}

fn close_requests() -> Subscription<Message> {
    window::close_requests().map(|_id| Message::CloseRequested)
}

struct EditorApp {
    view: EditorView,
    config: EditorConfig,
    result: ResultSlot<ValueMap>,
}

impl EditorApp {
    fn new(parameters: ParameterSet, config: EditorConfig, result: ResultSlot<ValueMap>) -> Self {
        Self {
            view: EditorView::new(parameters, config.clone()),
            config,
            result,
        }
    }

    fn title(&self) -> String {
        title_for(&self.config, self.view.is_dirty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match self.view.update(message) {
            Some(Event::Dismissed) => {
                *self.result.lock() = Some(self.view.values());
                iced::exit()
            }
            None => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.view.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        close_requests()
    }
}

struct TreeApp {
    view: TreeView,
    config: EditorConfig,
    result: ResultSlot<ValueTree>,
}

impl TreeApp {
    fn new(hierarchy: Hierarchy, config: EditorConfig, result: ResultSlot<ValueTree>) -> Self {
        Self {
            view: TreeView::new(hierarchy, config.clone()),
            config,
            result,
        }
    }

    fn title(&self) -> String {
        title_for(&self.config, self.view.is_dirty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match self.view.update(message) {
            Some(Event::Dismissed) => {
                *self.result.lock() = Some(self.view.values());
                iced::exit()
            }
            None => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.view.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        close_requests()
    }
}

/// Show `parameters` in a form and block until the window is dismissed.
///
/// Returns the committed values. Toolkit failures are returned unchanged.
pub fn exec_editor(parameters: ParameterSet, config: &EditorConfig) -> Result<ValueMap, iced::Error> {
    let initial = parameters.values();
    let result: ResultSlot<ValueMap> = Arc::default();

    let app_config = config.clone();
    let app_result = result.clone();
    info!("Showing editor with {} parameter(s)", parameters.len());

    iced::application(
        move || EditorApp::new(parameters.clone(), app_config.clone(), app_result.clone()),
        EditorApp::update,
        EditorApp::view,
    )
    .title(EditorApp::title)
    .window(window_settings(config))
    .subscription(EditorApp::subscription)
    .run()?;

    let values = result.lock().take();
    Ok(values.unwrap_or(initial))
}

/// Show `hierarchy` in a tree editor and block until the window is dismissed.
///
/// Returns the committed values of every leaf. Toolkit failures are returned
/// unchanged.
pub fn exec_tree(hierarchy: Hierarchy, config: &EditorConfig) -> Result<ValueTree, iced::Error> {
    let initial = hierarchy.values();
    let result: ResultSlot<ValueTree> = Arc::default();

    let app_config = config.clone();
    let app_result = result.clone();
    info!(
        "Showing tree with {} leaf group(s)",
        hierarchy.leaf_paths().len()
    );

    iced::application(
        move || TreeApp::new(hierarchy.clone(), app_config.clone(), app_result.clone()),
        TreeApp::update,
        TreeApp::view,
    )
    .title(TreeApp::title)
    .window(window_settings(config))
    .subscription(TreeApp::subscription)
    .run()?;

    let values = result.lock().take();
    Ok(values.unwrap_or(initial))
}
