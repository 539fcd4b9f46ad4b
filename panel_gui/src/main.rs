//! # Panel Demo GUI Application
//!
//! Desktop window with a menu bar, toolbar, side list, main text panel,
//! index buttons, a stocks table and a stock history table.
//! Built with Iced; all selection logic lives in `panel_core`.
//!
//! ## Configuration
//!
//! The catalogs come from the JSON file named by `--config <path>` or the
//! `PANEL_CONFIG` environment variable. Without either, built-in demo
//! catalogs are used and paths resolve against the working directory.

mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use iced::widget::{column, container, row, rule, stack, Column};
use iced::{Element, Length, Size, Task};
use tracing_subscriber::EnvFilter;

use panel_core::{PanelConfig, PanelController, PanelEvent};

use ui::menu_bar::MenuKind;

const WINDOW_TITLE: &str = "Panel Demo Application";

#[derive(Parser, Debug)]
#[command(name = "panel_gui")]
#[command(about = "Panel Demo desktop application")]
#[command(version)]
struct Args {
    /// JSON config file with catalogs and data paths
    #[arg(short, long, env = "PANEL_CONFIG")]
    config: Option<PathBuf>,
}

/// Application state
pub struct App {
    controller: PanelController,
    /// Dropdown currently open in the menu bar
    open_menu: Option<MenuKind>,
    about_open: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Panels
    SelectCategory(String),
    SelectIndex(String),
    StocksCellClicked(usize, usize),

    // Menu bar / toolbar
    ToggleMenu(MenuKind),
    NewPanels,
    OpenTable,
    ExitApp,
    ShowAbout,
    CloseAbout,
}

impl App {
    fn new(config: PanelConfig) -> Self {
        App {
            controller: PanelController::new(config),
            open_menu: None,
            about_open: false,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Any action other than toggling a menu closes open dropdowns
        if !matches!(message, Message::ToggleMenu(_)) {
            self.open_menu = None;
        }

        match message {
            Message::SelectCategory(name) => {
                self.controller.dispatch(PanelEvent::CategorySelected(name));
            }
            Message::SelectIndex(name) => {
                self.controller.dispatch(PanelEvent::IndexSelected(name));
            }
            Message::StocksCellClicked(row, column) => {
                self.controller
                    .dispatch(PanelEvent::StocksCellClicked { row, column });
            }
            Message::ToggleMenu(kind) => {
                self.open_menu = if self.open_menu == Some(kind) {
                    None
                } else {
                    Some(kind)
                };
            }
            Message::NewPanels => {
                self.controller.dispatch(PanelEvent::Reset);
            }
            Message::OpenTable => {
                let picked = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_title("Open Table")
                    .pick_file();
                match picked {
                    Some(path) => self.controller.dispatch(PanelEvent::TableOpened(path)),
                    None => tracing::debug!("Open dialog cancelled"),
                }
            }
            Message::ExitApp => {
                tracing::info!("Exit requested");
                return iced::exit();
            }
            Message::ShowAbout => {
                self.about_open = true;
            }
            Message::CloseAbout => {
                self.about_open = false;
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = self.controller.screen();
        let selection = self.controller.selection();

        let mut chrome: Column<'_, Message> = column![
            ui::menu_bar::view_menu_bar(self.open_menu),
        ];
        if let Some(kind) = self.open_menu {
            chrome = chrome.push(ui::menu_bar::view_dropdown(kind));
        }
        chrome = chrome.push(ui::toolbar::view_toolbar());

        let upper = row![
            ui::side_panel::view_side_panel(
                self.controller.config().categories.names(),
                selection.category.current.as_deref(),
            ),
            ui::main_panel::view_main_panel(
                screen,
                self.controller.config().indexes.names(),
                selection.index.current.as_deref(),
            ),
        ]
        .spacing(8)
        .height(Length::FillPortion(2));

        let body = column![
            upper,
            ui::table_panel::view_stocks_table(&screen.stocks),
            ui::table_panel::view_history_table(
                &screen.history,
                selection.symbol.current.as_deref(),
            ),
        ]
        .spacing(8)
        .padding(8)
        .height(Length::Fill);

        let layout = column![
            chrome,
            body,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&screen.status),
        ];

        let base = container(layout).width(Length::Fill).height(Length::Fill);

        if self.about_open {
            stack![
                base,
                ui::modal::view_backdrop(),
                ui::modal::view_about_modal(),
            ]
            .into()
        } else {
            base.into()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(args: &Args) -> anyhow::Result<PanelConfig> {
    match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading config");
            PanelConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(PanelConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let config = load_config(&args)?;
    tracing::info!(
        categories = config.categories.len(),
        indexes = config.indexes.len(),
        "Starting {}",
        WINDOW_TITLE
    );

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(WINDOW_TITLE)
        .window_size(Size::new(1000.0, 760.0))
        .run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag() {
        let args = Args::try_parse_from(["panel_gui", "--config", "config/panel.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("config/panel.json")));

        let args = Args::try_parse_from(["panel_gui", "-c", "other.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("other.json")));
    }

    #[test]
    fn test_bare_argument_is_rejected() {
        assert!(Args::try_parse_from(["panel_gui", "config/panel.json"]).is_err());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let args = Args { config: Some(PathBuf::from("does/not/exist.json")) };
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_load_config_without_path_uses_defaults() {
        let args = Args { config: None };
        assert_eq!(load_config(&args).unwrap(), PanelConfig::default());
    }
}
