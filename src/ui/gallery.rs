// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: header, category filter bar and the wrapped card layout.

use crate::domain::gallery::{Category, CategoryFilter, Item, ItemIndex};
use crate::i18n::fluent::I18n;
use crate::media::AssetImage;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A filter chip was pressed.
    FilterSelected(CategoryFilter),
    /// A card was pressed.
    CardActivated(ItemIndex),
}

/// Load state of one card thumbnail.
#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    #[default]
    Loading,
    Ready(AssetImage),
    Unavailable,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub categories: &'a [Category],
    pub filter: &'a CategoryFilter,
    pub items: &'a [Item],
    /// Cards to show, in display order.
    pub cards: &'a [ItemIndex],
    pub thumbnails: &'a HashMap<ItemIndex, Thumbnail>,
    /// Card holding the keyboard focus.
    pub focused: Option<ItemIndex>,
    /// Localized warning shown above the grid.
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let count = ctx.cards.len().to_string();
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.title).size(typography::TITLE_MD))
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr_with_args("gallery-count", &[("count", count.as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let mut layout = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(filter_bar(&ctx));

    if let Some(status) = ctx.status {
        layout = layout.push(
            Container::new(Text::new(status).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::container::warning_banner),
        );
    }

    let body: Element<'_, Message> = if ctx.cards.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        let cards = ctx
            .cards
            .iter()
            .filter_map(|index| ctx.items.iter().find(|item| item.index() == *index))
            .map(|item| card(&ctx, item));

        let grid = Row::with_children(cards)
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD);

        Scrollable::new(Container::new(grid).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    layout.push(body).into()
}

/// "All" followed by one chip per category.
fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let all = chip(
        ctx.i18n.tr("filter-all"),
        CategoryFilter::All,
        ctx.filter,
    );

    let chips = ctx.categories.iter().map(|category| {
        chip(
            category.to_string(),
            CategoryFilter::Only(category.clone()),
            ctx.filter,
        )
    });

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("filter-label"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(all)
        .extend(chips)
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

fn chip<'a>(
    label: String,
    filter: CategoryFilter,
    active: &CategoryFilter,
) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if &filter == active {
        styles::button::filter_active
    } else {
        styles::button::filter_inactive
    };

    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(style)
        .on_press(Message::FilterSelected(filter))
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, item: &'a Item) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.thumbnails.get(&item.index()) {
        Some(Thumbnail::Ready(thumbnail)) => image::Image::new(thumbnail.handle.clone())
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Thumbnail::Unavailable) => {
            let label = if item.alt().is_empty() {
                ctx.i18n.tr("card-unavailable")
            } else {
                item.alt().to_string()
            };
            placeholder(label)
        }
        Some(Thumbnail::Loading) | None => placeholder(ctx.i18n.tr("card-loading")),
    };

    // TODO: scroll the focused card into view when keyboard focus moves past
    // the visible part of the grid.
    let style: fn(&Theme, button::Status) -> button::Style =
        if ctx.focused == Some(item.index()) {
            styles::button::card_focused
        } else {
            styles::button::card
        };

    button(content)
        .padding(0.0)
        .style(style)
        .on_press(Message::CardActivated(item.index()))
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .height(Length::Fixed(sizing::CARD_PLACEHOLDER_HEIGHT))
    .padding(spacing::SM)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::card_placeholder)
    .into()
}
