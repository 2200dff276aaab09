// SPDX-License-Identifier: MPL-2.0
//! Bell widget summarizing the live notification set.
//!
//! The badge shows the current queue length and the dropdown lists every
//! live notification. There is no separate read/unread bookkeeping: a
//! notification leaves the history as soon as it leaves the engine.

use super::engine::{self, Engine};
use super::notification::Notification;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Largest count shown verbatim on the badge.
pub const BADGE_MAX: usize = 9;

/// Messages emitted by the bell and its dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Close,
    ClearAll,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Engine(engine::Message),
}

/// Processes a bell message, updating the dropdown state.
pub fn update(message: Message, open: &mut bool) -> Event {
    match message {
        Message::Toggle => {
            *open = !*open;
            Event::None
        }
        Message::Close => {
            *open = false;
            Event::None
        }
        Message::ClearAll => {
            *open = false;
            Event::Engine(engine::Message::ClearAll)
        }
    }
}

/// Badge text for `count` live notifications. `None` hides the badge.
#[must_use]
pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
        n => Some(n.to_string()),
    }
}

/// Renders the bell button with its count badge.
pub fn view_button<'a, A>(engine: &Engine<A>, open: bool) -> Element<'a, Message> {
    let icon = icons::themed(icons::sized(icons::bell(), sizing::ICON_MD));

    let mut layers = Stack::new().push(
        Container::new(icon)
            .padding(spacing::XXS)
            .width(Length::Fixed(sizing::ICON_MD + spacing::MD))
            .height(Length::Fixed(sizing::ICON_MD + spacing::MD))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    );

    if let Some(label) = badge_label(engine.len()) {
        let badge = Container::new(Text::new(label).size(typography::CAPTION))
            .height(Length::Fixed(sizing::BADGE_SIZE))
            .padding([0.0, spacing::XXS])
            .align_y(alignment::Vertical::Center)
            .style(styles::container::badge);
        layers = layers.push(
            Container::new(badge)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );
    }

    let bell = button(layers)
        .on_press(Message::Toggle)
        .padding(0.0);

    if open {
        bell.style(styles::button::selected).into()
    } else {
        bell.style(styles::button::ghost).into()
    }
}

/// Renders the dropdown listing every live notification.
pub fn view_dropdown<A>(engine: &Engine<A>) -> Element<'_, Message> {
    let heading = Text::new(format!("Notifications ({})", engine.len())).size(typography::TITLE_SM);

    let clear_label = Text::new("Clear all").size(typography::BODY_SM);
    let clear_button = if engine.is_empty() {
        button(clear_label).style(styles::button::disabled())
    } else {
        button(clear_label)
            .on_press(Message::ClearAll)
            .style(styles::button::ghost)
    };

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(heading).width(Length::Fill))
        .push(clear_button);

    let body: Element<'_, Message> = if engine.is_empty() {
        Container::new(Text::new("No notifications").size(typography::BODY_SM))
            .padding(spacing::MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        let entries = engine.list().iter().map(history_entry);
        scrollable(Column::with_children(entries).spacing(spacing::XXS)).into()
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(body);

    Container::new(content)
        .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
        .max_height(sizing::DROPDOWN_MAX_HEIGHT)
        .padding(spacing::SM)
        .style(styles::container::dropdown)
        .into()
}

/// Posted time, marked when the notification stays until dismissed.
fn history_caption<A>(notification: &Notification<A>) -> String {
    let posted = notification.posted_at().format("%H:%M");
    match notification.lifetime() {
        Some(_) => posted.to_string(),
        None => format!("{posted} · pinned"),
    }
}

fn history_entry<A>(notification: &Notification<A>) -> Element<'_, Message> {
    let icon = icons::sized(icons::icon_for_kind(notification.kind()), sizing::ICON_SM);
    let posted = history_caption(notification);

    let title_row = Row::new()
        .spacing(spacing::XS)
        .push(
            Container::new(Text::new(notification.title()).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(
            Text::new(posted)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    let text_column = Column::new()
        .spacing(2.0)
        .push(title_row)
        .push(Text::new(notification.message()).size(typography::BODY_SM));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Top)
        .push(icon)
        .push(text_column);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
