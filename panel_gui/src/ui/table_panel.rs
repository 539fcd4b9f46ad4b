//! Table Panels (Bottom)
//!
//! Draws a `TableGrid` as a header row plus rows of cells inside a
//! two-way scrollable.
//! - Stocks table: cells are clickable; a click in the symbol column loads
//!   that symbol's history
//! - History table: read-only

use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{Element, Length, Padding};

use panel_core::TableGrid;

use crate::Message;

/// Width of one table column in pixels
const CELL_WIDTH: f32 = 120.0;

/// Render the stocks (index summary) table
pub fn view_stocks_table(grid: &TableGrid) -> Element<'_, Message> {
    let title = if grid.is_empty() {
        "Stocks".to_string()
    } else {
        format!("Stocks ({} rows)", grid.row_count())
    };
    view_table(title, grid, true)
}

/// Render the stock history table
pub fn view_history_table<'a>(grid: &'a TableGrid, symbol: Option<&str>) -> Element<'a, Message> {
    let title = match symbol {
        Some(symbol) => format!("Stock History: {}", symbol),
        None => "Stock History".to_string(),
    };
    view_table(title, grid, false)
}

fn view_table(title: String, grid: &TableGrid, clickable: bool) -> Element<'_, Message> {
    let mut header: Row<'_, Message> = row![];
    for label in grid.headers() {
        header = header.push(
            container(text(label).size(11))
                .width(Length::Fixed(CELL_WIDTH))
                .padding(Padding::from([2, 4])),
        );
    }

    let mut rows: Column<'_, Message> = column![header].spacing(1);
    for (row_idx, cells) in grid.rows().enumerate() {
        let mut line: Row<'_, Message> = row![];
        for (col_idx, cell) in cells.iter().enumerate() {
            line = line.push(view_cell(cell.as_deref().unwrap_or(""), row_idx, col_idx, clickable));
        }
        rows = rows.push(line);
    }

    let table = scrollable(rows)
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

    container(column![text(title).size(12), table].spacing(4))
        .width(Length::Fill)
        .height(Length::FillPortion(1))
        .style(container::bordered_box)
        .padding(6)
        .into()
}

fn view_cell(value: &str, row: usize, column: usize, clickable: bool) -> Element<'_, Message> {
    if clickable {
        button(text(value).size(10))
            .on_press(Message::StocksCellClicked(row, column))
            .padding(Padding::from([2, 4]))
            .width(Length::Fixed(CELL_WIDTH))
            .style(button::text)
            .into()
    } else {
        container(text(value).size(10))
            .padding(Padding::from([2, 4]))
            .width(Length::Fixed(CELL_WIDTH))
            .into()
    }
}
