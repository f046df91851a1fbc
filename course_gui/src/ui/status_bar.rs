//! Status Bar (Bottom)
//!
//! Displays:
//! - Enrollment summary for the current plan
//! - Status messages (last export result)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use course_core::PlanConfig;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(config: &PlanConfig, status: &'a str) -> Element<'a, Message> {
    let enrollment = format!(
        "{} batch(es) x {} students = {} enrolled",
        config.batch_count,
        config.students_per_batch,
        config.total_students()
    );

    row![
        text(enrollment).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
