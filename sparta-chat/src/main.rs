use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sparta_chat::app::App;
use sparta_chat::chat::ChatSession;
use sparta_chat::ui::ui;
use sparta_sdk::Config;

/// Terminal chat client for the SPARTA hardware design platform
#[derive(Parser)]
#[command(name = "sparta-chat", version)]
struct Cli {
    /// Gateway base URL (overrides SPARTA_GATEWAY_URL)
    #[arg(long)]
    gateway_url: Option<String>,

    /// Diagnostic log file; the terminal itself belongs to the TUI
    #[arg(long, default_value = "sparta-chat.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("SPARTA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut config = Config::from_env();
    if let Some(url) = cli.gateway_url {
        config.gateway_url = url;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(config);

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Deliver any finished request and keep the spinner moving
        if let Some(chat) = app.chat.as_mut() {
            chat.poll_reply();
            if chat.waiting_for_response {
                chat.update_spinner();
            }
        }

        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        _ => {
                            if let Some(chat) = app.chat.as_mut() {
                                handle_chat_key(chat, key);
                            }
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_chat_key(chat: &mut ChatSession, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => chat.submit_input(),
        KeyCode::Up => chat.scroll_up(),
        KeyCode::Down => chat.scroll_down(),
        KeyCode::Backspace => {
            chat.input_buffer.pop();
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            chat.refresh_status();
        }
        KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            chat.fetch_result();
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            chat.cancel_workflow();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            chat.input_buffer.push(c);
        }
        _ => {}
    }
}
