//! UI widgets for the deal viewer.

pub mod cards;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::utils::sanitize_display;

use super::{App, FeedPhase};

/// Shown until the first snapshot of a subscription lands.
pub const LOADING_MESSAGE: &str = "Loading deals...";
/// Shown when the collection has no deals.
pub const EMPTY_MESSAGE: &str = "No deals available. Check back later!";

/// Draw the main UI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Card list
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_deals(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status, status_color) = match app.list.phase() {
        FeedPhase::Loading => ("Connecting...", Color::Yellow),
        FeedPhase::Errored(_) => ("Feed error", Color::Red),
        FeedPhase::Populated | FeedPhase::Empty => ("Live", Color::Green),
    };

    let updated = app
        .last_update
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let header_text = format!(
        " Status: {} | Deals: {} | Updated: {}",
        status,
        app.list.deals().len(),
        updated
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(status_color))
        .block(Block::default().borders(Borders::ALL).title(" Deal Tracker "));

    frame.render_widget(header, area);
}

fn draw_deals(frame: &mut Frame, app: &App, area: Rect) {
    match app.list.phase() {
        FeedPhase::Loading => {
            draw_status(frame, LOADING_MESSAGE, Style::default().fg(Color::Yellow), area);
        }
        FeedPhase::Empty => {
            draw_status(frame, EMPTY_MESSAGE, Style::default().fg(Color::DarkGray), area);
        }
        FeedPhase::Errored(message) => {
            let text = format!("Error loading deals: {}", sanitize_display(message));
            draw_status(frame, &text, Style::default().fg(Color::Red), area);
        }
        FeedPhase::Populated => cards::draw(frame, app, area),
    }
}

/// Replace the whole card area with a single status line.
fn draw_status(frame: &mut Frame, message: &str, style: Style, area: Rect) {
    let status = Paragraph::new(format!(" {}", message))
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Deals "));
    frame.render_widget(status, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = "q=quit j/k=nav r=refresh";
    let footer_text = match app.list.selected_deal() {
        Some(deal) if !deal.affiliate_url.is_empty() => {
            format!(" {} | {}", sanitize_display(&deal.affiliate_url), keys)
        }
        _ => format!(" {}", keys),
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
