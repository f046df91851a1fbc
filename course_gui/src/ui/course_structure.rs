//! Course Structure tab
//!
//! Displays:
//! - Weeknight batch slots (one or two, depending on batch count)
//! - The Sunday intensive slot
//! - Ten collapsible weeks with sessions and deliverables

use iced::widget::{column, row, rule, text, Column, Space};
use iced::{Alignment, Length};

use course_core::curriculum::{
    weeknight_slots, weeks, Week, SUNDAY_INTENSIVE_HOURS, SUNDAY_INTENSIVE_SLOT,
    WEEKNIGHT_SESSION_HOURS,
};

use super::shared::section::{card, view_section_header};
use super::shared::{ACCENT, MUTED};
use crate::Message;

/// Render the curriculum tab
pub fn view(batch_count: u32, expanded_week: Option<u32>) -> Column<'static, Message> {
    let mut content = column![view_schedule(batch_count)].spacing(8);

    content = content.push(text("Weekly Curriculum").size(16));
    for week in weeks() {
        content = content.push(view_week(week, expanded_week == Some(week.number)));
    }

    content
}

fn view_schedule(batch_count: u32) -> iced::Element<'static, Message> {
    let mut slots = column![
        text("Batch Timetable").size(14),
        text(format!(
            "Weeknight classes run {}h, Sunday intensives {}h",
            WEEKNIGHT_SESSION_HOURS, SUNDAY_INTENSIVE_HOURS
        ))
        .size(10)
        .color(MUTED),
        Space::new().height(4),
    ]
    .spacing(4);

    for slot in weeknight_slots(batch_count) {
        slots = slots.push(
            row![
                text(slot.batch).size(12).width(Length::Fixed(80.0)),
                text(slot.days).size(12),
                Space::new().width(Length::Fill),
                text(slot.time).size(12).color(MUTED),
            ]
            .align_y(Alignment::Center),
        );
    }
    slots = slots.push(text(SUNDAY_INTENSIVE_SLOT).size(12).color(ACCENT));

    card(slots).into()
}

fn view_week(week: &'static Week, expanded: bool) -> iced::Element<'static, Message> {
    let header = row![
        view_section_header(
            format!("Week {}: {}", week.number, week.title),
            expanded,
            Message::ToggleWeek(week.number),
        ),
        text(format!("{} hours total", week.hours)).size(10).color(MUTED),
    ]
    .align_y(Alignment::Center);

    if !expanded {
        return card(header).padding(4).into();
    }

    let mut sessions = column![].spacing(4);
    for session in &week.sessions {
        sessions = sessions.push(
            row![
                text(session.day).size(11).color(ACCENT).width(Length::Fixed(50.0)),
                text(session.topic).size(12).width(Length::Fill),
                text(session.duration_label()).size(10).color(MUTED),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    let mut deliverables = column![text("Deliverables").size(12)].spacing(2);
    for item in week.deliverables {
        deliverables = deliverables.push(text(format!("• {}", item)).size(11));
    }

    card(
        column![
            header,
            rule::horizontal(1),
            sessions,
            Space::new().height(4),
            deliverables,
        ]
        .spacing(6),
    )
    .padding(4)
    .into()
}
