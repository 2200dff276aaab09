// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent border, stacked in the
//! top-right corner in insertion order (newest at the bottom).

use super::engine::{Engine, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast stack rendering.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<A>(notification: &Notification<A>, now: Instant) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();
        let id = notification.id();

        let icon_widget = icons::sized(icons::icon_for_kind(kind), sizing::ICON_MD);

        let title = Text::new(notification.title())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });
        let message = Text::new(notification.message())
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            });

        let mut body = Column::new().spacing(spacing::XXS).push(title).push(message);

        if let Some(countdown) = remaining_label(notification.expires_at(), now) {
            body = body.push(Text::new(countdown).size(typography::CAPTION).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                },
            ));
        }

        if let Some(action) = notification.action() {
            let action_button = button(Text::new(action.label.as_str()).size(typography::BODY_SM))
                .on_press(Message::ActivateAction(id))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link(accent_color));
            body = body.push(action_button);
        }

        let dismiss_button = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(styles::button::ghost);

        // Layout: [icon] [title/message/action] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every live notification as a stack anchored top-right.
    pub fn view_overlay<A>(engine: &Engine<A>) -> Element<'_, Message> {
        if engine.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let now = Instant::now();
        let toasts: Vec<Element<'_, Message>> = engine
            .list()
            .iter()
            .map(|notification| Self::view(notification, now))
            .collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        // Offset below the navbar so the bell stays clickable.
        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(iced::Padding {
                top: sizing::NAVBAR_HEIGHT + spacing::XS,
                right: spacing::MD,
                bottom: spacing::MD,
                left: spacing::MD,
            })
            .into()
    }
}

/// Countdown caption for a timed toast, rounded up to whole seconds.
/// Persistent toasts have none.
fn remaining_label(expires_at: Option<Instant>, now: Instant) -> Option<String> {
    let left = expires_at?.saturating_duration_since(now);
    Some(format!("Closes in {}s", left.as_millis().div_ceil(1000)))
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..bg
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
