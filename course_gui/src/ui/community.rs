//! Community Support tab

use iced::widget::{column, row, text, Column};

use course_core::curriculum::community_channels;

use super::shared::section::card;
use super::shared::MUTED;
use crate::Message;

/// Render the support channel cards
pub fn view() -> Column<'static, Message> {
    let mut cards = row![].spacing(12);
    for channel in community_channels() {
        cards = cards.push(card(
            column![
                text(channel.name).size(16),
                text(channel.description).size(12).color(MUTED),
            ]
            .spacing(6),
        ));
    }

    column![
        text("Community Support").size(16),
        text("Every student stays connected to mentors and peers beyond class hours.")
            .size(11)
            .color(MUTED),
        cards,
    ]
    .spacing(10)
}
