//! Click-to-edit currency amount
//!
//! Shows the formatted amount with a pencil marker. Clicking it opens a
//! text box holding the raw number; Enter or "Done" commits the text
//! through [`course_core::PlanConfig::apply_input`].

use iced::widget::{button, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use course_core::{PlanField, Rupees};

use super::MUTED;
use crate::{InlineEdit, Message};

/// Render the amount for `field`, or its editor when it is being edited
pub fn view<'a>(
    field: PlanField,
    value: Rupees,
    editing: Option<&'a InlineEdit>,
) -> Element<'a, Message> {
    match editing {
        Some(edit) if edit.field == field => row![
            text_input("0", &edit.text)
                .on_input(Message::EditChanged)
                .on_submit(Message::CommitEdit)
                .width(Length::Fixed(110.0))
                .padding(2)
                .size(12),
            button(text("Done").size(10))
                .on_press(Message::CommitEdit)
                .padding(Padding::from([2, 6]))
                .style(button::primary),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .into(),
        _ => button(
            row![
                text(value.display()).size(12),
                Space::new().width(6),
                text("✎").size(10).color(MUTED),
            ]
            .align_y(Alignment::Center),
        )
        .on_press(Message::StartEdit(field))
        .padding(0)
        .style(button::text)
        .into(),
    }
}
