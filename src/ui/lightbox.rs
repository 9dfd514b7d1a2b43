// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox drawn above the gallery grid.
//!
//! The layer swallows every pointer event so the grid underneath stays
//! inert. A click on the backdrop outside the image asks to close the
//! viewer; the request is sent on release so the app can tell a tap from
//! the end of a swipe.

use crate::application::input::Direction;
use crate::application::port::ViewerFrame;
use crate::application::ViewerPosition;
use crate::i18n::fluent::I18n;
use crate::media::AssetImage;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, image, mouse_area, opaque, responsive, tooltip, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    /// A press on the backdrop was released.
    BackdropReleased,
    Navigate(Direction),
}

/// Load state of the full-resolution asset on display.
#[derive(Debug, Clone, Default)]
pub enum ViewerImage {
    #[default]
    Loading,
    Ready(AssetImage),
    /// Fetch failed; carries the i18n key of the reason.
    Failed(&'static str),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: &'a ViewerFrame,
    /// Category label of the displayed item, for the caption.
    pub category: &'a str,
    pub image: &'a ViewerImage,
    /// Position in the visible set; `None` when the item is filtered out.
    pub position: Option<ViewerPosition>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let close = tooltip(
        button(Text::new("✕").size(typography::BODY_LG))
            .padding(spacing::SM)
            .style(styles::button::lightbox_control)
            .on_press(Message::Close),
        Text::new(ctx.i18n.tr("viewer-close")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let top_bar = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(nav_button(ctx.i18n, Direction::Previous))
        .push(
            Container::new(stage_content(&ctx))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(nav_button(ctx.i18n, Direction::Next))
        .height(Length::Fill);

    let index = ctx.frame.index.to_string();
    let caption = ctx.i18n.tr_with_args(
        "viewer-caption",
        &[("category", ctx.category), ("index", index.as_str())],
    );
    let mut info = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(caption).size(typography::BODY));
    if let Some(position) = ctx.position {
        let current = (position.position + 1).to_string();
        let total = position.total.to_string();
        info = info.push(
            Text::new(ctx.i18n.tr_with_args(
                "viewer-position",
                &[("position", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_200),
        );
    }

    let caption_bar = Container::new(
        Container::new(info)
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::caption),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let layer = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(top_bar)
        .push(stage)
        .push(caption_bar);

    opaque(
        mouse_area(
            Container::new(layer)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_release(Message::BackdropReleased),
    )
}

fn nav_button(i18n: &I18n, direction: Direction) -> Element<'_, Message> {
    let (glyph, key) = match direction {
        Direction::Previous => ("◀", "viewer-previous"),
        Direction::Next => ("▶", "viewer-next"),
    };

    tooltip(
        button(
            Container::new(Text::new(glyph).size(typography::TITLE_MD))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::lightbox_control)
        .on_press(Message::Navigate(direction)),
        Text::new(i18n.tr(key)).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .into()
}

fn stage_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.image {
        ViewerImage::Ready(asset) => {
            let handle = asset.handle.clone();
            let natural = Size::new(asset.width as f32, asset.height as f32);
            responsive(move |available| {
                let bounds = Size::new(
                    available.width * sizing::LIGHTBOX_FILL,
                    available.height * sizing::LIGHTBOX_FILL,
                );
                let fitted = fit_within(natural, bounds);
                // Presses on the picture itself must not reach the backdrop.
                Container::new(opaque(
                    image::Image::new(handle.clone())
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fixed(fitted.width))
                        .height(Length::Fixed(fitted.height)),
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
            })
            .into()
        }
        ViewerImage::Loading => Text::new(ctx.i18n.tr("viewer-loading"))
            .size(typography::BODY)
            .color(palette::GRAY_200)
            .into(),
        ViewerImage::Failed(key) => {
            let mut column = Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::BODY)
                        .color(palette::ERROR_500),
                );
            if !ctx.frame.alt.is_empty() {
                column = column.push(
                    Text::new(ctx.frame.alt.as_str())
                        .size(typography::CAPTION)
                        .color(palette::GRAY_200),
                );
            }
            column.into()
        }
    }
}

/// Scales `natural` down to fit inside `bounds`, keeping its aspect ratio.
/// Images smaller than the bounds keep their natural size.
fn fit_within(natural: Size, bounds: Size) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Size::ZERO;
    }
    let scale = (bounds.width / natural.width)
        .min(bounds.height / natural.height)
        .min(1.0)
        .max(0.0);
    Size::new(natural.width * scale, natural.height * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_image_is_scaled_to_the_tighter_bound() {
        let fitted = fit_within(Size::new(1600.0, 1600.0), Size::new(800.0, 400.0));
        assert_eq!(fitted, Size::new(400.0, 400.0));
    }

    #[test]
    fn small_image_keeps_natural_size() {
        let fitted = fit_within(Size::new(300.0, 200.0), Size::new(900.0, 600.0));
        assert_eq!(fitted, Size::new(300.0, 200.0));
    }

    #[test]
    fn portrait_image_keeps_aspect_ratio() {
        let fitted = fit_within(Size::new(600.0, 800.0), Size::new(1000.0, 400.0));
        assert_eq!(fitted, Size::new(300.0, 400.0));
    }

    #[test]
    fn degenerate_sizes_collapse_to_zero() {
        assert_eq!(
            fit_within(Size::new(0.0, 100.0), Size::new(10.0, 10.0)),
            Size::ZERO
        );
        assert_eq!(
            fit_within(Size::new(100.0, 100.0), Size::new(-5.0, 10.0)),
            Size::ZERO
        );
    }
}
