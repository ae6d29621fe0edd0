mod app;
mod bot;
mod calc;
mod config;
mod data;
mod files;
mod session;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Focus, Popup};
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "paneru")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "A terminal demo dashboard showing off the ratatui widget catalog")]
struct Args {
    /// Open on a specific page (home, analytics, gallery, forms, chat, files, media, about)
    #[arg(short, long)]
    page: Option<String>,

    /// Override the synthetic dataset seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the synthetic dataset as JSON and exit
    #[arg(long)]
    dataset: bool,

    /// Print the scripted bot's reply to a prompt and exit
    #[arg(long)]
    ask: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(seed) = args.seed {
        config.dataset_seed = seed;
    }
    if let Some(page) = args.page {
        if app::Page::parse(&page).is_none() {
            anyhow::bail!("unknown page: {}", page);
        }
        config.start_page = Some(page);
    }

    // Handle CLI-only commands
    if args.dataset {
        return print_dataset(&config);
    }

    if let Some(prompt) = args.ask {
        println!("{}", bot::reply(&prompt));
        return Ok(());
    }

    // Run TUI
    run_tui(config).await
}

/// Dump the synthetic dataset to stdout for scripts and inspection.
fn print_dataset(config: &AppConfig) -> Result<()> {
    let dataset = data::Dataset::generate(config.dataset_seed, config.dataset_rows);
    println!("{}", serde_json::to_string_pretty(&dataset.rows)?);
    Ok(())
}

async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        // 'q' only quits from the sidebar; everywhere
                        // else it's an ordinary character
                        KeyCode::Char('q')
                            if app.popup == Popup::None && app.focus == Focus::Sidebar =>
                        {
                            return Ok(())
                        }
                        KeyCode::Char('c')
                            if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                        {
                            return Ok(())
                        }
                        _ => {
                            // Handle key and catch any errors to prevent crashes
                            if let Err(e) = app.handle_key(key).await {
                                app.status_message = Some(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        // Time-based effects (status expiry, chat reply, progress)
        app.tick();
    }
}
