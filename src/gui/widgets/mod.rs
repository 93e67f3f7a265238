//! Widget helpers that compose iced primitives into consistent form controls.
//!
//! Centralizes styling decisions so the views focus purely on layout.

use iced::widget::{button, column, container, pick_list, row, space, text, text_input, toggler, tooltip};
use iced::{Alignment, Element, Length};

use crate::gui::message::Message;
use crate::gui::theme;

pub fn labeled_row<'a>(
    label: &'a str,
    label_width: f32,
    widget: Element<'a, Message>,
) -> Element<'a, Message> {
    row![text(label).width(Length::Fixed(label_width)), widget,]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

pub fn labeled_row_with_help<'a>(
    label: &'a str,
    label_width: f32,
    widget: Element<'a, Message>,
    help_text: &'a str,
) -> Element<'a, Message> {
    column![
        row![text(label).width(Length::Fixed(label_width)), widget,]
            .spacing(10)
            .align_y(Alignment::Center),
        row![
            space().width(label_width),
            text(format!("ⓘ {}", help_text))
                .size(12)
                .style(|_theme| text::Style {
                    color: Some(theme::colors::TEXT_MUTED),
                }),
        ],
    ]
    .spacing(4)
    .into()
}

/// Hover text for a control
pub fn with_tooltip<'a>(widget: Element<'a, Message>, help_text: &'a str) -> Element<'a, Message> {
    tooltip(
        widget,
        container(text(help_text).size(12))
            .padding([4, 8])
            .style(theme::section_container_style),
        tooltip::Position::Bottom,
    )
    .into()
}

pub fn section_header<'a>(title: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(title)
        .size(20)
        .style(|_theme| text::Style {
            color: Some(theme::colors::PRIMARY),
        })
        .into()
}

/// Expand/collapse row for a branch, indented by `indent`
pub fn collapsible_header<'a>(
    title: String,
    expanded: bool,
    indent: f32,
    on_toggle: Message,
) -> Element<'a, Message> {
    let icon = if expanded { "▼" } else { "▶" };

    button(
        row![space().width(indent), text(icon).size(12), text(title).size(14),]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(on_toggle)
    .padding([6, 8])
    .width(Length::Fill)
    .style(theme::branch_button_style)
    .into()
}

/// Selectable row for a leaf, indented by `indent`
pub fn nav_item<'a>(
    title: String,
    selected: bool,
    indent: f32,
    on_select: Message,
) -> Element<'a, Message> {
    button(row![space().width(indent), text(title).size(14)].align_y(Alignment::Center))
        .on_press(on_select)
        .padding([6, 8])
        .width(Length::Fill)
        .style(theme::nav_button_style(selected))
        .into()
}

pub fn toggle_switch<'a>(
    value: bool,
    on_toggle: Option<impl Fn(bool) -> Message + 'a>,
) -> Element<'a, Message> {
    toggler(value).on_toggle_maybe(on_toggle).into()
}

/// Pick list; without `on_select` the selection is shown in a disabled field
pub fn dropdown<'a, T>(
    options: impl IntoIterator<Item = T> + 'a,
    selected: Option<T>,
    on_select: Option<impl Fn(T) -> Message + 'a>,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    match on_select {
        Some(on_select) => pick_list(options.into_iter().collect::<Vec<_>>(), selected, on_select)
            .placeholder("Select...")
            .width(Length::Fixed(200.0))
            .into(),
        None => {
            let shown = selected.map(|s| s.to_string()).unwrap_or_default();
            text_input("Select...", &shown)
                .width(Length::Fixed(200.0))
                .into()
        }
    }
}

pub fn line_edit<'a>(
    value: &'a str,
    placeholder: &'a str,
    on_change: Option<impl Fn(String) -> Message + 'a>,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input_maybe(on_change)
        .width(Length::Fill)
        .into()
}

pub fn number_input<'a>(
    value: &'a str,
    placeholder: &'a str,
    width: f32,
    on_change: Option<impl Fn(String) -> Message + 'a>,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input_maybe(on_change)
        .width(Length::Fixed(width))
        .into()
}

/// Typed entry between step buttons; a step button is disabled when its
/// message is `None`.
pub fn spin_box<'a>(
    entry: Element<'a, Message>,
    on_decrement: Option<Message>,
    on_increment: Option<Message>,
    range: String,
) -> Element<'a, Message> {
    row![
        button(text("−"))
            .on_press_maybe(on_decrement)
            .padding([4, 10])
            .style(theme::secondary_button_style),
        entry,
        button(text("+"))
            .on_press_maybe(on_increment)
            .padding([4, 10])
            .style(theme::secondary_button_style),
        text(range).size(12).style(|_theme| text::Style {
            color: Some(theme::colors::TEXT_MUTED),
        }),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

pub fn info_box<'a>(text_content: &'a str) -> Element<'a, Message> {
    container(
        row![text("ⓘ").size(16), text(text_content).size(13),]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(
            theme::colors::INFO.scale_alpha(0.1),
        )),
        border: iced::Border {
            color: theme::colors::INFO.scale_alpha(0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

pub fn warning_box<'a>(text_content: String) -> Element<'a, Message> {
    container(
        row![text("⚠").size(16), text(text_content).size(13),]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(
            theme::colors::WARNING.scale_alpha(0.1),
        )),
        border: iced::Border {
            color: theme::colors::WARNING.scale_alpha(0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

pub fn section_container<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::section_container_style)
        .into()
}
