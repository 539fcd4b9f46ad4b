//! Main Panel (Center)
//!
//! - Label: "Main Panel: {category}"
//! - Read-only text body (category items or load errors)
//! - One button per stock index

use iced::widget::{button, column, container, row, scrollable, text, Row};
use iced::{Element, Length, Padding};

use panel_core::Screen;

use crate::Message;

/// Render the main panel
pub fn view_main_panel<'a>(
    screen: &'a Screen,
    indexes: impl Iterator<Item = &'a str>,
    selected_index: Option<&str>,
) -> Element<'a, Message> {
    let body = container(scrollable(text(&screen.main_text).size(12)).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(6)
        .style(container::bordered_box);

    let mut buttons: Row<'_, Message> = row![].spacing(6);
    for name in indexes {
        let is_selected = selected_index == Some(name);
        buttons = buttons.push(
            button(text(name).size(11))
                .on_press(Message::SelectIndex(name.to_string()))
                .padding(Padding::from([4, 12]))
                .style(if is_selected { button::primary } else { button::secondary }),
        );
    }

    let content = column![
        text(&screen.main_label).size(13),
        body,
        buttons,
    ]
    .spacing(6);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(6)
        .into()
}
