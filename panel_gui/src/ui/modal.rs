//! Modal dialog component
//!
//! Help > About overlay, drawn above the window with a click-to-dismiss
//! backdrop.

use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::CloseAbout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the About dialog
pub fn view_about_modal() -> Element<'static, Message> {
    let content = column![
        text("Panel Demo").size(18),
        Space::new().height(8),
        text(format!("Version {}", env!("CARGO_PKG_VERSION"))).size(11),
        Space::new().height(8),
        text("Pick a category on the left, load an index with the buttons,").size(12),
        text("then click a symbol to see its recent history.").size(12),
        Space::new().height(16),
        container(
            button(text("Close").size(11))
                .on_press(Message::CloseAbout)
                .padding(Padding::from([6, 16]))
                .style(button::primary),
        )
        .align_x(iced::alignment::Horizontal::Right)
        .width(Length::Fill),
    ]
    .width(Length::Fixed(380.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
