//! Visual theme matching the lamco brand palette.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

pub mod colors {
    use iced::Color;

    pub const PRIMARY: Color = Color::from_rgb(0.2, 0.4, 0.8);
    pub const PRIMARY_LIGHT: Color = Color::from_rgb(0.4, 0.6, 0.9);
    pub const PRIMARY_DARK: Color = Color::from_rgb(0.1, 0.3, 0.6);

    pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const SURFACE_DARK: Color = Color::from_rgb(0.96, 0.96, 0.98);
    pub const BACKGROUND: Color = Color::from_rgb(0.94, 0.94, 0.96);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.1, 0.15);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.4, 0.4, 0.5);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.6, 0.6, 0.65);

    pub const SUCCESS: Color = Color::from_rgb(0.2, 0.7, 0.3);
    pub const WARNING: Color = Color::from_rgb(0.9, 0.6, 0.0);
    pub const INFO: Color = Color::from_rgb(0.2, 0.5, 0.9);

    pub const NAV_SELECTED: Color = PRIMARY;
    pub const NAV_HOVER: Color = Color::from_rgb(0.9, 0.93, 0.98);
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(colors::PRIMARY)),
        text_color: Color::WHITE,
        border: Border {
            color: colors::PRIMARY_DARK,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors::PRIMARY_LIGHT)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors::PRIMARY_DARK)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.7, 0.7, 0.7))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            ..base
        },
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(colors::SURFACE)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: Color::from_rgb(0.8, 0.8, 0.85),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors::SURFACE_DARK)),
            border: Border {
                color: colors::PRIMARY,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.92))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.95, 0.95, 0.95))),
            text_color: Color::from_rgb(0.6, 0.6, 0.6),
            ..base
        },
    }
}

/// Leaf rows in the navigation pane; the bound leaf is highlighted.
pub fn nav_button_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = button::Style {
            background: Some(Background::Color(if selected {
                colors::NAV_SELECTED
            } else {
                Color::TRANSPARENT
            })),
            text_color: if selected {
                Color::WHITE
            } else {
                colors::TEXT_PRIMARY
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };

        match status {
            button::Status::Hovered if !selected => button::Style {
                background: Some(Background::Color(colors::NAV_HOVER)),
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(colors::PRIMARY_DARK)),
                text_color: Color::WHITE,
                ..base
            },
            _ => base,
        }
    }
}

/// Branch rows in the navigation pane
pub fn branch_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let header = collapsible_header_style();
    button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(colors::NAV_HOVER)),
            _ => header.background,
        },
        text_color: colors::TEXT_SECONDARY,
        border: header.border,
        shadow: header.shadow,
        snap: false,
    }
}

pub fn section_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE)),
        border: Border {
            color: Color::from_rgb(0.88, 0.88, 0.9),
            width: 1.0,
            radius: 8.0.into(),
        },
        text_color: Some(colors::TEXT_PRIMARY),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        snap: false,
    }
}

fn collapsible_header_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE_DARK)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        text_color: Some(colors::TEXT_PRIMARY),
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Navigation pane background
pub fn navigation_pane_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE_DARK)),
        border: Border {
            color: Color::from_rgb(0.88, 0.88, 0.9),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn dirty_indicator_color(dirty: bool) -> Color {
    if dirty {
        colors::WARNING
    } else {
        colors::SUCCESS
    }
}
