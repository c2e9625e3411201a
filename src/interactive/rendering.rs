//! TUI rendering with ratatui
//!
//! Draws the scramble tray, the drop zone, scores and messages, and records
//! the inner widget areas the mouse handler hit-tests against.

use super::app::App;
use crate::game::{FeedbackStyle, STRIKE_LIMIT};
use crate::store::Store;
use crate::words::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordSource, S: Store>(f: &mut Frame, app: &mut App<W, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Scramble tray
            Constraint::Length(3), // Drop zone
            Constraint::Length(3), // Score line
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.game.state().is_over() {
        app.tray_area = None;
        app.zone_area = None;
        render_game_over(f, app, chunks[1].union(chunks[4]));
    } else {
        render_tray(f, app, chunks[1]);
        render_zone(f, app, chunks[2]);
        render_scores(f, app, chunks[3]);
        render_messages(f, app, chunks[4]);
    }

    render_status(f, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔀 SCRAMBLE - Rebuild the Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tray<W: WordSource, S: Store>(f: &mut Frame, app: &mut App<W, S>, area: Rect) {
    let state = app.game.state();
    let mut spans: Vec<Span> = Vec::new();

    for (slot, ch) in state.scrambled.chars().enumerate() {
        let token = format!("[{}]", ch.to_ascii_uppercase());
        let style = if state.arrangement.is_placed(slot) {
            Style::default().fg(Color::DarkGray)
        } else if app.dragging == Some(slot) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        if state.arrangement.is_placed(slot) {
            spans.push(Span::styled("[ ]", style));
        } else {
            spans.push(Span::styled(token, style));
        }
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(" Scrambled Letters ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    app.tray_area = Some(block.inner(area));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_zone<W: WordSource, S: Store>(f: &mut Frame, app: &mut App<W, S>, area: Rect) {
    let state = app.game.state();

    let line = if state.arrangement.is_empty() {
        Line::from(Span::styled(
            "drop letters here",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans: Vec<Span> = Vec::new();
        for placed in state.arrangement.placed() {
            spans.push(Span::styled(
                format!("[{}]", placed.letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(" Your Word ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    app.zone_area = Some(block.inner(area));

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_scores<W: WordSource, S: Store>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let scores = &app.game.state().scores;

    let strikes = "✗".repeat(scores.strikes.min(STRIKE_LIMIT) as usize);
    let strikes_left = "·".repeat((STRIKE_LIMIT - scores.strikes.min(STRIKE_LIMIT)) as usize);

    let line = Line::from(vec![
        Span::raw("Points: "),
        Span::styled(
            scores.points.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Strikes: "),
        Span::styled(strikes, Style::default().fg(Color::Red)),
        Span::styled(strikes_left, Style::default().fg(Color::DarkGray)),
        Span::raw("   Passes: "),
        Span::styled(
            scores.passes.to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<W: WordSource, S: Store>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                FeedbackStyle::Info => Style::default().fg(Color::Cyan),
                FeedbackStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                FeedbackStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_game_over<W: WordSource, S: Store>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let scores = &app.game.state().scores;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "G A M E   O V E R",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Final score: "),
            Span::styled(
                format!("{} points", scores.points),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'n' for a new game or 'q' to quit",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new(
        "drag with the mouse | type letters to place | Enter submit | p pass | n new | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hints, area);
}
