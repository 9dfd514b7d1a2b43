// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filter chip for the active category.
pub fn filter_active(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Filter chip for the other categories; adapts to light/dark theme.
pub fn filter_inactive(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (text_color, hover_bg) = if is_light {
        (palette::GRAY_900, palette::GRAY_200)
    } else {
        (WHITE, palette::GRAY_700)
    };

    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (hover_bg, palette::PRIMARY_500),
        _ => (Color::TRANSPARENT, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button wrapping a card; highlights on hover.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Card holding the keyboard focus; outlined regardless of pointer state.
pub fn card_focused(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = card(theme, status);
    style.border.color = palette::PRIMARY_500;
    style.border.width = 3.0;
    style
}

/// Round translucent control floating over the lightbox image.
pub fn lightbox_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}
