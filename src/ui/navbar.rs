// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Holds the application title, the "Export CSV" header action and the
//! notification bell. The bell dropdown itself is rendered by the app as an
//! overlay so it can float above the page content.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{bell, Engine, NotificationMessage};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a, A> {
    pub title: &'a str,
    pub notifications: &'a Engine<A>,
    pub bell_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Bell(bell::Message),
    ExportCsv,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Notifications(NotificationMessage),
    ExportCsv,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, bell_open: &mut bool) -> Event {
    match message {
        Message::Bell(msg) => match bell::update(msg, bell_open) {
            bell::Event::None => Event::None,
            bell::Event::Engine(msg) => Event::Notifications(msg),
        },
        Message::ExportCsv => {
            *bell_open = false;
            Event::ExportCsv
        }
    }
}

/// Render the navigation bar.
pub fn view<'a, A>(ctx: ViewContext<'a, A>) -> Element<'a, Message> {
    let title = Text::new(ctx.title).size(typography::TITLE_MD);

    let export_button = button(Text::new("Export CSV").size(typography::BODY_SM))
        .on_press(Message::ExportCsv)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary);

    let bell_button: Element<'a, Message> =
        bell::view_button(ctx.notifications, ctx.bell_open).map(Message::Bell);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(export_button)
        .push(bell_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Descriptor;

    #[test]
    fn navbar_view_renders() {
        let engine: Engine<()> = Engine::default();
        let _element = view(ViewContext {
            title: "Taxboard",
            notifications: &engine,
            bell_open: false,
        });
    }

    #[test]
    fn navbar_view_renders_with_badge_and_open_bell() {
        let mut engine: Engine<()> = Engine::default();
        engine
            .enqueue(Descriptor::info("Synced", "12 transactions imported"))
            .unwrap();
        let _element = view(ViewContext {
            title: "Taxboard",
            notifications: &engine,
            bell_open: true,
        });
    }

    #[test]
    fn bell_toggle_changes_state_without_event() {
        let mut open = false;
        assert_eq!(update(Message::Bell(bell::Message::Toggle), &mut open), Event::None);
        assert!(open);
        assert_eq!(update(Message::Bell(bell::Message::Toggle), &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn clear_all_is_forwarded_to_the_engine() {
        let mut open = true;
        let event = update(Message::Bell(bell::Message::ClearAll), &mut open);
        assert!(!open);
        assert_eq!(event, Event::Notifications(NotificationMessage::ClearAll));
    }

    #[test]
    fn export_closes_bell_and_emits_event() {
        let mut open = true;
        assert_eq!(update(Message::ExportCsv, &mut open), Event::ExportCsv);
        assert!(!open);
    }
}
