// SPDX-License-Identifier: MPL-2.0
//! Recent activity panel.
//!
//! Lists a handful of imported transactions with a suggested category. Row
//! actions classify or flag a transaction and report back through
//! notifications; the panel never talks to the engine directly, it returns
//! [`Event::Notify`] and lets the app enqueue.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Descriptor;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Stable identifier of a transaction row.
pub type TransactionId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: &'static str,
    pub asset: &'static str,
    pub amount: &'static str,
    pub suggested_category: &'static str,
    pub category: Option<&'static str>,
    pub flagged: bool,
}

impl Transaction {
    const fn new(
        id: TransactionId,
        date: &'static str,
        asset: &'static str,
        amount: &'static str,
        suggested_category: &'static str,
    ) -> Self {
        Self {
            id,
            date,
            asset,
            amount,
            suggested_category,
            category: None,
            flagged: false,
        }
    }

    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}

/// Messages emitted by the activity panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Classify(TransactionId),
    /// Reverts a classification. Dispatched from a notification action.
    Undo(TransactionId),
    Flag(TransactionId),
    SimulateSyncFailure,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Notify(Descriptor<Message>),
}

#[derive(Debug, Clone)]
pub struct State {
    transactions: Vec<Transaction>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transactions: vec![
                Transaction::new(1, "2024-03-02", "BTC", "+0.0125", "Mining income"),
                Transaction::new(2, "2024-03-05", "ETH", "-1.40", "Disposal"),
                Transaction::new(3, "2024-03-09", "SOL", "+3.82", "Staking reward"),
                Transaction::new(4, "2024-03-14", "USDC", "-250.00", "Transfer"),
                Transaction::new(5, "2024-03-21", "ETH", "+0.07", "Airdrop"),
            ],
        }
    }
}

impl State {
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn find_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|tx| tx.id == id)
    }

    /// Applies a panel message. Unknown ids and repeated actions are no-ops.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Classify(id) => {
                let Some(tx) = self.find_mut(id) else {
                    return Event::None;
                };
                if tx.is_classified() {
                    return Event::None;
                }
                tx.category = Some(tx.suggested_category);
                Event::Notify(
                    Descriptor::info(
                        "Transaction classified",
                        format!("{} {} marked as {}", tx.amount, tx.asset, tx.suggested_category),
                    )
                    .with_action("Undo", Message::Undo(id)),
                )
            }
            Message::Undo(id) => {
                let Some(tx) = self.find_mut(id) else {
                    return Event::None;
                };
                let Some(previous) = tx.category.take() else {
                    return Event::None;
                };
                Event::Notify(Descriptor::success(
                    "Classification undone",
                    format!("{} {} is no longer {}", tx.amount, tx.asset, previous),
                ))
            }
            Message::Flag(id) => {
                let Some(tx) = self.find_mut(id) else {
                    return Event::None;
                };
                if tx.flagged {
                    return Event::None;
                }
                tx.flagged = true;
                Event::Notify(
                    Descriptor::warning(
                        "Anomaly flagged",
                        format!("{} {} on {} needs review", tx.amount, tx.asset, tx.date),
                    )
                    .persistent(),
                )
            }
            Message::SimulateSyncFailure => Event::Notify(
                Descriptor::error(
                    "Sync failed",
                    "The exchange API did not respond. Balances may be stale.",
                )
                .persistent(),
            ),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new("Recent activity").size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("Simulate sync failure").size(typography::BODY_SM))
                    .on_press(Message::SimulateSyncFailure)
                    .style(styles::button::ghost),
            );

        let rows = self.transactions.iter().map(transaction_row);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(header_row())
            .extend(rows);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }
}

const DATE_WIDTH: f32 = 110.0;
const ASSET_WIDTH: f32 = 70.0;
const AMOUNT_WIDTH: f32 = 100.0;

fn header_row<'a>() -> Element<'a, Message> {
    let caption = |label: &'a str| {
        Text::new(label)
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            })
    };

    Row::new()
        .spacing(spacing::SM)
        .push(caption("Date").width(Length::Fixed(DATE_WIDTH)))
        .push(caption("Asset").width(Length::Fixed(ASSET_WIDTH)))
        .push(caption("Amount").width(Length::Fixed(AMOUNT_WIDTH)))
        .push(caption("Category").width(Length::Fill))
        .into()
}

fn transaction_row(tx: &Transaction) -> Element<'_, Message> {
    let category = match tx.category {
        Some(category) => Text::new(category).size(typography::BODY),
        None => Text::new(format!("Suggested: {}", tx.suggested_category))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
    };

    let classify = if tx.is_classified() {
        button(Text::new("Classify").size(typography::BODY_SM)).style(styles::button::disabled())
    } else {
        button(Text::new("Classify").size(typography::BODY_SM))
            .on_press(Message::Classify(tx.id))
            .style(styles::button::primary)
    };

    let flag = if tx.flagged {
        button(Text::new("Flagged").size(typography::BODY_SM)).style(styles::button::selected)
    } else {
        button(Text::new("Flag").size(typography::BODY_SM))
            .on_press(Message::Flag(tx.id))
            .style(styles::button::ghost)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(tx.date).width(Length::Fixed(DATE_WIDTH)))
        .push(Text::new(tx.asset).width(Length::Fixed(ASSET_WIDTH)))
        .push(Text::new(tx.amount).width(Length::Fixed(AMOUNT_WIDTH)))
        .push(Container::new(category).width(Length::Fill))
        .push(classify)
        .push(flag)
        .into()
}
