//! # Panel Demo CLI Application
//!
//! Terminal front-end for the panel controller. Each subcommand maps onto a
//! controller event and prints the resulting screen; `shell` keeps one
//! controller alive across commands, the way the GUI does.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use panel_core::{PanelConfig, PanelController, PanelEvent, Screen, TableGrid};

#[derive(Parser)]
#[command(name = "panel_cli")]
#[command(about = "Browse categories, index summaries and stock history from the terminal")]
#[command(version)]
struct Cli {
    /// JSON config file with catalogs and data paths
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the base data directory
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Maximum table rows to print
    #[arg(short, long, global = true, default_value_t = 20)]
    limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories and indexes
    List,

    /// Show one category's items
    Category { name: String },

    /// Load an index summary, optionally following one symbol row
    Index {
        name: String,

        /// Row whose symbol history should be shown
        #[arg(long)]
        symbol_row: Option<usize>,
    },

    /// Load any CSV file into the stocks table
    Open { path: PathBuf },

    /// Interactive prompt sharing one controller across commands
    Shell,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PanelConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PanelConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let mut controller = PanelController::new(config);
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List => print_catalogs(&controller, &mut out)?,
        Commands::Category { name } => {
            controller.dispatch(PanelEvent::CategorySelected(name));
            print_main_panel(controller.screen(), &mut out)?;
        }
        Commands::Index { name, symbol_row } => {
            controller.dispatch(PanelEvent::IndexSelected(name));
            if let Some(row) = symbol_row {
                controller.dispatch(PanelEvent::StocksCellClicked { row, column: 0 });
            }
            print_screen(controller.screen(), cli.limit, &mut out)?;
        }
        Commands::Open { path } => {
            controller.dispatch(PanelEvent::TableOpened(path));
            print_screen(controller.screen(), cli.limit, &mut out)?;
        }
        Commands::Shell => run_shell(&mut controller, cli.limit, &mut out)?,
    }

    Ok(())
}

fn run_shell(controller: &mut PanelController, limit: usize, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Panel Demo shell. Type 'help' for commands.")?;
    writeln!(out, "Status: {}", controller.screen().status)?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();

        let event = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help(out)?;
                continue;
            }
            "list" => {
                print_catalogs(controller, out)?;
                continue;
            }
            "category" => PanelEvent::CategorySelected(arg.to_string()),
            "index" => PanelEvent::IndexSelected(arg.to_string()),
            "open" => PanelEvent::TableOpened(PathBuf::from(arg)),
            "new" => PanelEvent::Reset,
            "click" => match parse_cell(arg) {
                Some((row, column)) => PanelEvent::StocksCellClicked { row, column },
                None => {
                    writeln!(out, "usage: click <row> [column]")?;
                    continue;
                }
            },
            other => {
                writeln!(out, "unknown command '{}', try 'help'", other)?;
                continue;
            }
        };

        controller.dispatch(event);
        print_screen(controller.screen(), limit, out)?;
    }

    Ok(())
}

/// Parse "<row> [column]"; the column defaults to the symbol column
fn parse_cell(arg: &str) -> Option<(usize, usize)> {
    let mut parts = arg.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let column = match parts.next() {
        Some(c) => c.parse().ok()?,
        None => 0,
    };
    Some((row, column))
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  list                 categories and indexes")?;
    writeln!(out, "  category <name>      show a category")?;
    writeln!(out, "  index <name>         load an index summary")?;
    writeln!(out, "  click <row> [col]    click a stocks table cell")?;
    writeln!(out, "  open <path>          load a CSV into the stocks table")?;
    writeln!(out, "  new                  reset all panels")?;
    writeln!(out, "  quit")
}

fn print_catalogs(controller: &PanelController, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Categories:")?;
    for name in controller.category_names() {
        writeln!(out, "  {}", name)?;
    }
    writeln!(out, "Indexes:")?;
    for name in controller.index_names() {
        let path = controller.config().index_path(&name).unwrap_or_default();
        writeln!(out, "  {} ({})", name, path.display())?;
    }
    Ok(())
}

fn print_main_panel(screen: &Screen, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", screen.main_label)?;
    if !screen.main_text.is_empty() {
        writeln!(out, "{}", screen.main_text)?;
    }
    Ok(())
}

fn print_screen(screen: &Screen, limit: usize, out: &mut impl Write) -> io::Result<()> {
    print_main_panel(screen, out)?;
    print_grid("Stocks", &screen.stocks, limit, out)?;
    print_grid("Stock History", &screen.history, limit, out)?;
    writeln!(out, "[{}]", screen.status)
}

fn print_grid(title: &str, grid: &TableGrid, limit: usize, out: &mut impl Write) -> io::Result<()> {
    if grid.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "-- {} ({} rows) --", title, grid.row_count())?;

    let shown: Vec<&[Option<String>]> = grid.rows().take(limit).collect();
    let widths: Vec<usize> = (0..grid.column_count())
        .map(|col| {
            let header = grid.headers().get(col).map_or(0, |h| h.chars().count());
            shown
                .iter()
                .filter_map(|row| row.get(col)?.as_deref())
                .map(|cell| cell.chars().count())
                .fold(header, usize::max)
                .min(32)
        })
        .collect();

    let header: Vec<String> = grid
        .headers()
        .iter()
        .zip(&widths)
        .map(|(h, w)| fit(h, *w))
        .collect();
    writeln!(out, "{}", header.join(" | "))?;

    for row in &shown {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| fit(cell.as_deref().unwrap_or(""), *w))
            .collect();
        writeln!(out, "{}", cells.join(" | "))?;
    }

    if grid.row_count() > shown.len() {
        writeln!(out, "... {} more rows", grid.row_count() - shown.len())?;
    }
    Ok(())
}

/// Pad or truncate `value` to exactly `width` characters
fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count > width {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    } else {
        format!("{:<width$}", value, width = width)
    }
}
