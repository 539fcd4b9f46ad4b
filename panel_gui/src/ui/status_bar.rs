//! Status Bar (Bottom)
//!
//! Shows the controller's latest status message ("Ready" at startup).

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str) -> Element<'_, Message> {
    row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 8]))
    .into()
}
