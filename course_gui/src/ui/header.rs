//! Header components
//!
//! The course banner with headline fees, the tab bar, and the summary strip
//! shown under every tab.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use course_core::curriculum::course;
use course_core::PlanConfig;

use super::shared::{ACCENT, GREEN, MUTED};
use crate::{Message, Tab};

/// Render the course banner
pub fn view_header(config: &PlanConfig) -> Element<'static, Message> {
    let course = course();
    let facts = row![
        text(course.duration_label()).size(12),
        text(format!("{} Hours", course.total_hours)).size(12),
        text("Industry-Optimized").size(12),
    ]
    .spacing(16);

    let title = column![
        text("COURSE BLUEPRINT").size(11).color(ACCENT),
        text(course.title).size(28),
        facts,
    ]
    .spacing(6);

    let fees = column![
        text(config.regular_fee.display()).size(24),
        text("Regular Fee").size(11).color(MUTED),
        Space::new().height(4),
        text(config.early_bird_fee.display()).size(16).color(GREEN),
        text(format!("Early Bird (First {})", config.early_bird_limit_per_batch))
            .size(10)
            .color(GREEN),
    ]
    .spacing(2)
    .align_x(Alignment::End);

    container(
        row![title, Space::new().width(Length::Fill), fees].align_y(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Render the tab bar
pub fn view_tabs(active: Tab) -> Element<'static, Message> {
    let mut tabs = row![].spacing(6);

    for tab in Tab::ALL {
        let style = if tab == active {
            button::primary
        } else {
            button::secondary
        };
        tabs = tabs.push(
            button(text(tab.label()).size(13))
                .on_press(Message::TabSelected(tab))
                .padding(Padding::from([10, 16]))
                .width(Length::Fill)
                .style(style),
        );
    }

    tabs.into()
}

/// Render the "ready to launch" summary strip
pub fn view_launch_strip(config: &PlanConfig) -> Element<'static, Message> {
    let stat = |value: String, label: &'static str| {
        column![text(value).size(20), text(label).size(10).color(MUTED)]
            .spacing(2)
            .align_x(Alignment::Center)
    };

    let course = course();
    let stats = row![
        stat(course.weeks.to_string(), "Weeks"),
        stat(course.total_hours.to_string(), "Hours"),
        stat(config.students_per_batch.to_string(), "Students/Batch"),
    ]
    .spacing(32);

    container(
        row![
            column![
                text("Ready to Launch?").size(18),
                text("Complete pedagogical and financial roadmap for the next cohort.")
                    .size(11)
                    .color(MUTED),
            ]
            .spacing(4),
            Space::new().width(Length::Fill),
            stats,
        ]
        .align_y(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
