//! Menu Bar (Top)
//!
//! Two menus rendered as buttons with an inline dropdown:
//! - File: New, Open, Exit
//! - Help: About

use iced::widget::{button, column, container, row, rule, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Menus in the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    File,
    Help,
}

impl MenuKind {
    pub const ALL: &'static [MenuKind] = &[MenuKind::File, MenuKind::Help];

    pub fn name(&self) -> &'static str {
        match self {
            MenuKind::File => "File",
            MenuKind::Help => "Help",
        }
    }
}

/// Render the menu bar row
pub fn view_menu_bar(open_menu: Option<MenuKind>) -> Element<'static, Message> {
    let mut menus = row![].spacing(2);

    for kind in MenuKind::ALL {
        let is_open = open_menu == Some(*kind);
        menus = menus.push(
            button(text(kind.name()).size(12))
                .on_press(Message::ToggleMenu(*kind))
                .padding(Padding::from([4, 10]))
                .style(if is_open { button::primary } else { button::text }),
        );
    }

    container(row![menus, Space::new().width(Length::Fill)].align_y(Alignment::Center))
        .padding(Padding::from([2, 4]))
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Render the dropdown for an open menu
pub fn view_dropdown(kind: MenuKind) -> Element<'static, Message> {
    let entries = match kind {
        MenuKind::File => column![
            menu_entry("New", Message::NewPanels),
            menu_entry("Open", Message::OpenTable),
            rule::horizontal(1),
            menu_entry("Exit", Message::ExitApp),
        ],
        MenuKind::Help => column![menu_entry("About", Message::ShowAbout)],
    }
    .spacing(2)
    .width(Length::Fixed(130.0));

    // Offset the Help dropdown under its button
    let offset = match kind {
        MenuKind::File => 4.0,
        MenuKind::Help => 52.0,
    };

    row![
        Space::new().width(offset),
        container(entries).padding(4).style(container::bordered_box),
    ]
    .into()
}

fn menu_entry(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(11))
        .on_press(message)
        .padding(Padding::from([4, 12]))
        .width(Length::Fill)
        .style(button::secondary)
        .into()
}
