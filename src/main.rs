// src/main.rs

mod layout;
mod source;
mod table;
mod tui_app;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use source::{open_table, DirSource};
use tui_app::TuiApp;

/// Terminal viewer for delimited text files
#[derive(Parser, Debug)]
#[command(name = "tabview", version, about = "Terminal viewer for delimited text files")]
struct CliArgs {
    /// Dataset to open: a CSV file path, or a bare name resolved as
    /// <data-dir>/<name>.csv
    #[arg(value_name = "DATASET")]
    dataset: String,

    /// Directory searched for bare dataset names
    #[arg(long, value_name = "DIR", default_value = "db")]
    data_dir: String,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    debug!(dataset = %args.dataset, data_dir = %args.data_dir, "startup");

    let source = DirSource::new(&args.data_dir);
    let table = open_table(&source, &args.dataset);

    let title = Path::new(&args.dataset)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(args.dataset.as_str())
        .to_string();
    let mut app = TuiApp::new(table, title);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.hide_cursor()?;

    let result = app.main_loop(&mut terminal);

    terminal.show_cursor()?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}
