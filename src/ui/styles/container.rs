// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card placeholder shown while a thumbnail loads or after it failed.
pub fn card_placeholder(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill behind the caption and position counter.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Status line for warnings such as an unreadable settings file.
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WARNING_500)),
        text_color: Some(BLACK),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
