//! mahal binary entry point

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tracing::{error, info};
use unicode_width::UnicodeWidthStr;

use mahal::{
    browser::Grid,
    browser_tui::App,
    cli::{Cli, Commands},
    client::{RecordClient, RecordSource},
    config::Config,
    models::{Identifier, Record},
    shaper::{ArabicShaper, Shaper},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "mahal=info");
    }

    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // Handle CLI mode - print output and exit without TUI
    if let Some(command) = cli.command {
        init_logging(None);
        if let Err(e) = handle_cli_command(command, &config).await {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Log to file so the TUI display stays clean
    init_logging(Some(&config.log_file));
    info!("Starting mahal TUI against {}", config.base_url());

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(_) => {
            info!("mahal exited successfully");
        }
        Err(e) => {
            error!("mahal encountered an error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Initialize logging to a file (TUI mode) or to stderr (CLI mode)
fn init_logging(log_file: Option<&Path>) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_os_string())
                .unwrap_or_else(|| "mahal.log".into());
            let file_appender = tracing_appender::rolling::never(dir, file_name);

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_filter(EnvFilter::from_default_env()),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(EnvFilter::from_default_env()),
                )
                .init();
        }
    }
}

/// Handle CLI mode commands - print output and exit
async fn handle_cli_command(command: Commands, config: &Config) -> Result<()> {
    let client = RecordClient::new(config)?;
    let shaper = ArabicShaper::new(config.shape_text);

    let response = match &command {
        Commands::First => client.first().await,
        Commands::Next { last_id } => client.next(&Identifier::from(last_id.as_str())).await,
        Commands::Prev { last_id } => client.prev(&Identifier::from(last_id.as_str())).await,
        Commands::Lines { mah_idd } => {
            return print_lines(&client, &shaper, mah_idd).await;
        }
    };

    let value = response.with_context(|| format!("Request to {} failed", client.base_url()))?;
    let record = Record::from_json(&value).ok_or_else(|| anyhow!("No record returned"))?;

    println!("id:      {}", record.id);
    println!("mah_idd: {}", shaper.shape(&record.mah_idd_param()));
    println!();

    print_lines(&client, &shaper, &record.mah_idd_param()).await
}

/// Print the detail lines of a record as an aligned table
async fn print_lines(client: &RecordClient, shaper: &ArabicShaper, mah_idd: &str) -> Result<()> {
    let rows = match client.detail_rows(mah_idd).await {
        Ok(rows) => Some(rows),
        Err(e) if e.is_transport() => return Err(e.into()),
        Err(e) => {
            info!("No detail lines for '{}': {}", mah_idd, e);
            None
        }
    };

    let grid = Grid::render(rows.as_ref(), shaper);
    let widths = grid.column_widths(usize::MAX);

    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(&cell.text, *width))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }

    Ok(())
}

/// Pad to a display width; `format!` pads by chars, not terminal cells
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
