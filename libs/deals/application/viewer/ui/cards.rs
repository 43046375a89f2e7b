//! Deal card widgets.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::viewer::App;
use crate::domain::Deal;
use crate::utils::{format_currency, sanitize_display};

/// Rows taken by one card, borders included.
const CARD_HEIGHT: u16 = 6;

/// Draw the card list, keeping the selected card on screen.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Deals ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let deals = app.list.deals();
    if deals.is_empty() || inner.height < CARD_HEIGHT {
        return;
    }

    let visible = (inner.height / CARD_HEIGHT) as usize;
    let selected = app.list.selected_index();
    let first = scroll_offset(selected, deals.len(), visible);
    let shown = deals.len().saturating_sub(first).min(visible);

    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); shown];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (slot, (index, deal)) in deals.iter().enumerate().skip(first).take(shown).enumerate() {
        draw_card(frame, deal, index == selected, chunks[slot]);
    }
}

/// First visible card index such that the selection stays on screen.
fn scroll_offset(selected: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        0
    } else {
        selected.saturating_sub(visible - 1).min(total - visible)
    }
}

fn draw_card(frame: &mut Frame, deal: &Deal, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(" {} ", sanitize_display(&deal.source));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Paragraph::new(card_lines(deal));
    frame.render_widget(body, inner);
}

/// The content lines of one card: title, price line, image, link.
pub fn card_lines(deal: &Deal) -> Vec<Line<'static>> {
    let mut price_spans = vec![Span::styled(
        format_currency(deal.current_price),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];

    if deal.original_price.is_some() {
        price_spans.push(Span::raw("  "));
        price_spans.push(Span::styled(
            format_currency(deal.original_price),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }

    if deal.has_discount() {
        let percent = deal.discount_percent.unwrap_or(0.0);
        price_spans.push(Span::raw("  "));
        price_spans.push(Span::styled(
            format!("{}% OFF", percent),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
    }

    vec![
        Line::from(Span::styled(
            sanitize_display(&deal.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(price_spans),
        Line::from(Span::styled(
            sanitize_display(deal.image_or_placeholder()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                "View Deal ",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                sanitize_display(&deal.affiliate_url),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ]
}
