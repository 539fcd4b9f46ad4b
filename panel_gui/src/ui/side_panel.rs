//! Side Panel (Left)
//!
//! Fixed-width list of category names. Clicking one shows its items in the
//! main panel.

use iced::widget::{button, column, container, scrollable, text, Column, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Width of the side panel in pixels
pub const SIDE_PANEL_WIDTH: f32 = 200.0;

/// Render the side panel
pub fn view_side_panel<'a>(
    categories: impl Iterator<Item = &'a str>,
    selected: Option<&str>,
) -> Element<'a, Message> {
    let mut list: Column<'_, Message> = column![].spacing(2);

    for name in categories {
        let is_selected = selected == Some(name);
        list = list.push(
            button(text(name).size(11))
                .on_press(Message::SelectCategory(name.to_string()))
                .padding(Padding::from([4, 8]))
                .style(if is_selected { button::primary } else { button::secondary })
                .width(Length::Fill),
        );
    }

    let content = column![
        text("Side Panel").size(13),
        Space::new().height(6),
        scrollable(list),
    ];

    container(content)
        .width(Length::Fixed(SIDE_PANEL_WIDTH))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(6)
        .into()
}
