//! Toolbar component
//!
//! Fixed row of New, Open and Exit actions under the menu bar.

use iced::widget::{button, row, rule, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the toolbar
pub fn view_toolbar() -> Element<'static, Message> {
    row![
        tool_button("New", Message::NewPanels),
        tool_button("Open", Message::OpenTable),
        rule::vertical(1),
        tool_button("Exit", Message::ExitApp),
        Space::new().width(Length::Fill),
    ]
    .spacing(4)
    .height(Length::Fixed(32.0))
    .padding(Padding::from([4, 8]))
    .align_y(Alignment::Center)
    .into()
}

fn tool_button(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(11))
        .on_press(message)
        .padding(Padding::from([4, 8]))
        .style(button::secondary)
        .into()
}
