//! Deal Viewer - Terminal UI for the live deals collection
//!
//! Subscribes to the hosted store's deals feed and renders the most recent
//! deals as cards. The list redraws on every pushed snapshot; `r` drops the
//! current subscription and opens a fresh one.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use deal_tracker::bin_common::{load_config_from_env, ConfigType};
use deals::application::viewer::{ui, App};
use deals::config::ViewerConfig;
use deals::infrastructure::feed::LiveDealFeed;

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Note: Logging is disabled for the TUI - it would corrupt the alternate screen display

    let config_path = load_config_from_env(ConfigType::Viewer);
    let config = ViewerConfig::load(&config_path)?;

    // Create tokio runtime for the feed's read task
    let runtime = tokio::runtime::Runtime::new()?;

    let source = Arc::new(LiveDealFeed::from_config(&config.feed));
    let mut app = App::new(runtime.handle().clone(), source);
    app.subscribe();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Release the live feed
    app.shutdown();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply whatever the feed pushed since the last tick
        app.drain_feed();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input with 10ms timeout (for real-time updates)
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('j') | KeyCode::Down => {
                            app.list.select_next();
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            app.list.select_prev();
                        }
                        KeyCode::Char('r') => {
                            // Drop the old feed, then resubscribe
                            app.refresh();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
