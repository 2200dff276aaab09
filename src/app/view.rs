// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of layers: page (navbar + activity), toast overlay,
//! and, while open, a click-away backdrop with the bell dropdown.

use super::Message;
use crate::ui::activity;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{bell, Engine, Toast};
use iced::widget::{mouse_area, scrollable, Column, Container, Space, Stack};
use iced::{alignment, mouse, Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub notifications: &'a Engine<Message>,
    pub bell_open: bool,
    pub activity: &'a activity::State,
}

fn bell_message(message: bell::Message) -> Message {
    Message::Navbar(navbar::Message::Bell(message))
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        title: ctx.title,
        notifications: ctx.notifications,
        bell_open: ctx.bell_open,
    })
    .map(Message::Navbar);

    let body = Container::new(scrollable(ctx.activity.view().map(Message::Activity)))
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(body);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts);

    if ctx.bell_open {
        let backdrop = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
            .on_press(bell_message(bell::Message::Close))
            .interaction(mouse::Interaction::Idle);

        let dropdown = Container::new(bell::view_dropdown(ctx.notifications).map(bell_message))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: sizing::NAVBAR_HEIGHT,
                right: spacing::MD,
                bottom: 0.0,
                left: 0.0,
            });

        layers = layers.push(backdrop).push(dropdown);
    }

    layers.into()
}
