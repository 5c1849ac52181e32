//! Stateless UI rendering for the statue board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use statue_swap_core::{CALLED_SEPARATOR, StatueId};

use super::app::App;
use crate::render;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Called shapes
            Constraint::Min(7),    // Statues
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Statue Swap")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_called(frame, chunks[1], app);
    draw_statues(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-3/←→ select statue   c/s/t pick shape   n new game   q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_called(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.game().session();
    let mut spans = vec![Span::styled(
        session.called().abbreviations(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if session.solved() {
        spans.push(Span::raw(CALLED_SEPARATOR));
        spans.push(Span::styled(
            "Solved!",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let called = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title("Called").borders(Borders::ALL));
    frame.render_widget(called, area);
}

fn draw_statues(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for statue in StatueId::ALL {
        draw_statue(frame, cols[statue.index()], app, statue);
    }
}

fn draw_statue(frame: &mut Frame, area: Rect, app: &App, statue: StatueId) {
    let game = app.game();
    let code = game.session().statues().get(statue);

    let border_style = if statue == app.focus() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            render::statue_label(code, app.show_codes()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(shape) = render::pending_marker(game, statue) {
        lines.push(Line::from(Span::styled(
            format!("picked: {}", shape),
            Style::default().fg(Color::Magenta),
        )));
    }

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!("Statue {}", statue))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(panel, area);
}
