//! Layout helpers shared by the tab bodies

use iced::widget::{button, container, row, text, Container, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Collapsible section header with a ▼/▶ indicator
pub fn view_section_header<'a>(
    title: impl Into<String>,
    expanded: bool,
    on_toggle: Message,
) -> Element<'a, Message> {
    let indicator = if expanded { "▼" } else { "▶" };

    button(
        row![
            text(indicator).size(10),
            Space::new().width(6),
            text(title.into()).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(on_toggle)
    .padding(Padding::from([6, 8]))
    .style(button::text)
    .width(Length::Fill)
    .into()
}

/// Bordered card filling the available width
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
}

/// Label on the left, value on the right
pub fn value_row<'a>(
    label: impl Into<String>,
    value: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    row![
        text(label.into()).size(12),
        Space::new().width(Length::Fill),
        value.into(),
    ]
    .align_y(Alignment::Center)
    .into()
}
