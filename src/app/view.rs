// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery grid is always drawn; while the viewer is open the lightbox
//! is stacked above it.

use super::Message;
use crate::application::GalleryController;
use crate::domain::gallery::{Category, ItemIndex};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, Thumbnail};
use crate::ui::lightbox::{self, ViewerImage};
use crate::ui::GallerySurface;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub gallery: &'a GalleryController<GallerySurface>,
    pub categories: &'a [Category],
    pub thumbnails: &'a HashMap<ItemIndex, Thumbnail>,
    pub focused: Option<ItemIndex>,
    pub viewer_image: &'a ViewerImage,
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = ctx.gallery.surface();

    let grid = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        title: ctx.title,
        categories: ctx.categories,
        filter: ctx.gallery.filter(),
        items: ctx.gallery.items(),
        cards: surface.visible_cards(),
        thumbnails: ctx.thumbnails,
        focused: ctx.focused,
        status: ctx.status,
    })
    .map(Message::Gallery);

    let mut stack = Stack::new()
        .push(Container::new(grid).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(frame) = surface.viewer() {
        let category = ctx
            .gallery
            .item(frame.index)
            .map_or("", |item| item.category().as_str());

        let overlay = lightbox::view(lightbox::ViewContext {
            i18n: ctx.i18n,
            frame,
            category,
            image: ctx.viewer_image,
            position: ctx.gallery.viewer_position(),
        })
        .map(Message::Lightbox);

        stack = stack.push(overlay);
    }

    stack.into()
}
