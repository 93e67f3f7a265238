//! Standalone parameter form
//!
//! [`EditorView`] is the embeddable editor: the host forwards messages to
//! [`EditorView::update`] and renders [`EditorView::view`]. The form, action
//! bar and confirmation renderers are shared with the tree view.

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length};
use tracing::{debug, warn};

use crate::config::{EditorConfig, LayoutConfig};
use crate::editor::{
    EditorWidget, Guard, ParameterEditor, ParameterForm, PendingAction, WidgetInput, WidgetState,
};
use crate::gui::message::{Event, Message};
use crate::gui::{theme, widgets};
use crate::param::{ParameterSet, ValueMap};

/// Embeddable editor for one parameter set.
#[derive(Debug, Clone)]
pub struct EditorView {
    form: ParameterForm,
    config: EditorConfig,
}

impl EditorView {
    pub fn new(parameters: ParameterSet, config: EditorConfig) -> Self {
        Self {
            form: ParameterForm::new(parameters),
            config,
        }
    }

    pub fn form(&self) -> &ParameterForm {
        &self.form
    }

    pub fn into_form(self) -> ParameterForm {
        self.form
    }

    /// Committed values
    pub fn values(&self) -> ValueMap {
        self.form.values()
    }

    pub fn is_dirty(&self) -> bool {
        self.form.is_dirty()
    }

    /// Handle a message. Returns [`Event::Dismissed`] once a close request
    /// has gone through.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::WidgetChanged(key, input) => {
                if let Err(e) = self.form.edit(&key, input) {
                    warn!("{}", e);
                }
                None
            }
            Message::Accept => dismissed_if_closing(self.form.accept()),
            Message::Reset => dismissed_if_closing(self.form.reset()),
            Message::KeepEditing => {
                self.form.dismiss_confirmation();
                None
            }
            Message::CloseRequested => match self.form.request_close() {
                Guard::Proceed => Some(Event::Dismissed),
                Guard::Blocked => None,
            },
            Message::NodeSelected(path) => {
                debug!("Standalone editor ignores selection of '{}'", path);
                None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editor = self.form.editor();

        let header = container(widgets::section_header(self.config.window.title.as_str()))
            .padding([12, 20])
            .width(Length::Fill);

        column![
            header,
            scrollable(
                container(view_form(editor, &self.config.layout))
                    .padding([0, 20])
                    .width(Length::Fill)
            )
            .height(Length::Fill),
            view_footer(editor),
        ]
        .spacing(0)
        .into()
    }
}

pub(crate) fn dismissed_if_closing(action: Option<PendingAction>) -> Option<Event> {
    matches!(action, Some(PendingAction::Close)).then_some(Event::Dismissed)
}

/// One row per widget, followed by the confirmation when one is pending
pub(crate) fn view_form<'a>(
    editor: &'a ParameterEditor,
    layout: &'a LayoutConfig,
) -> Element<'a, Message> {
    let interactive = editor.pending().is_none();

    let rows: Vec<Element<'a, Message>> = editor
        .widgets()
        .map(|(key, widget)| view_row(key, widget, layout, interactive))
        .collect();

    let form = widgets::section_container(column(rows).spacing(12).into());

    match editor.pending() {
        Some(action) => column![form, space().height(20.0), view_confirmation(action)].into(),
        None => form,
    }
}

fn view_row<'a>(
    key: &str,
    widget: &'a EditorWidget,
    layout: &LayoutConfig,
    interactive: bool,
) -> Element<'a, Message> {
    let control = view_control(key, widget, interactive);
    match widget.tooltip() {
        Some(help) if layout.show_help => {
            widgets::labeled_row_with_help(widget.label(), layout.label_width, control, help)
        }
        Some(help) => widgets::labeled_row(
            widget.label(),
            layout.label_width,
            widgets::with_tooltip(control, help),
        ),
        None => widgets::labeled_row(widget.label(), layout.label_width, control),
    }
}

/// Render the control for one widget state
fn view_control<'a>(key: &str, widget: &'a EditorWidget, interactive: bool) -> Element<'a, Message> {
    let key = key.to_string();
    let changed = move |input: WidgetInput| Message::WidgetChanged(key.clone(), input);

    match widget.state() {
        WidgetState::CheckBox { checked } => {
            let on_toggle = move |b| changed(WidgetInput::Toggled(b));
            widgets::toggle_switch(*checked, interactive.then_some(on_toggle))
        }
        WidgetState::ComboBox { choices, selected } => {
            let on_select = move |s| changed(WidgetInput::Selected(s));
            widgets::dropdown(
                choices.iter().cloned(),
                Some(selected.clone()),
                interactive.then_some(on_select),
            )
        }
        WidgetState::SpinBox {
            lo,
            hi,
            value,
            buffer,
        } => {
            let step = |delta: i64, enabled: bool| {
                (interactive && enabled).then(|| changed(WidgetInput::Stepped(delta)))
            };
            let on_decrement = step(-1, value > lo);
            let on_increment = step(1, value < hi);
            let on_type = {
                let changed = changed.clone();
                move |s| changed(WidgetInput::Typed(s))
            };
            widgets::spin_box(
                widgets::number_input(buffer, "", 80.0, interactive.then_some(on_type)),
                on_decrement,
                on_increment,
                format!("{}..={}", lo, hi),
            )
        }
        WidgetState::LineEdit { text } => {
            let on_type = move |s| changed(WidgetInput::Typed(s));
            widgets::line_edit(text, "", interactive.then_some(on_type))
        }
    }
}

/// Blocking confirmation: only Accept or Reset resolve it
pub(crate) fn view_confirmation<'a>(action: &PendingAction) -> Element<'a, Message> {
    let prompt = match action {
        PendingAction::Close => "Accept or reset the changes before closing.".to_string(),
        PendingAction::Navigate(path) => {
            format!("Accept or reset the changes before showing '{}'.", path)
        }
    };

    container(
        column![
            text("Unsaved changes").size(18),
            space().height(8.0),
            widgets::warning_box(prompt),
            space().height(12.0),
            row![
                button(text("Keep Editing"))
                    .on_press(Message::KeepEditing)
                    .padding([8, 16])
                    .style(theme::secondary_button_style),
                space().width(Length::Fill),
                button(text("Reset"))
                    .on_press(Message::Reset)
                    .padding([8, 16])
                    .style(theme::secondary_button_style),
                button(text("Accept"))
                    .on_press(Message::Accept)
                    .padding([8, 16])
                    .style(theme::primary_button_style),
            ]
            .spacing(10),
        ]
        .spacing(8)
        .padding(20)
        .width(Length::Fixed(450.0)),
    )
    .padding(2)
    .style(theme::section_container_style)
    .into()
}

/// Dirty indicator with the Accept and Reset buttons
pub(crate) fn view_footer<'a>(editor: &ParameterEditor) -> Element<'a, Message> {
    let dirty = editor.is_dirty();
    let color = theme::dirty_indicator_color(dirty);
    let status = text(if dirty { " Unsaved changes" } else { " No changes" })
        .size(12)
        .style(move |_theme| text::Style { color: Some(color) });

    let enabled = editor.actions_enabled() && editor.pending().is_none();

    container(
        row![
            status,
            space().width(Length::Fill),
            button(text("Reset"))
                .on_press_maybe(enabled.then_some(Message::Reset))
                .padding([6, 12])
                .style(theme::secondary_button_style),
            button(text("Accept"))
                .on_press_maybe(enabled.then_some(Message::Accept))
                .padding([6, 12])
                .style(theme::primary_button_style),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .padding([8, 20]),
    )
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(theme::colors::SURFACE)),
        border: iced::Border {
            color: theme::colors::SURFACE_DARK,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    })
    .width(Length::Fill)
    .into()
}
