//! Result card: sentiment badge, confidence and per-class bars, or the error banner

use crate::ui::results::ResultView;
use crate::ui::theme::{label_color, DEFAULT_THEME};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

fn card() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(DEFAULT_THEME.card_bg).fg(DEFAULT_THEME.fg))
}

/// Height the result card wants for `view`, or for an error banner
pub fn results_height(view: Option<&ResultView>, has_error: bool) -> u16 {
    if has_error {
        return 3;
    }
    match view {
        Some(view) => 2 + 2 + 2 * view.rows.len() as u16,
        None => 0,
    }
}

/// Render the error banner
pub fn render_error_pane(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(card());
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render the result card
pub fn render_results_pane(frame: &mut Frame, area: Rect, view: &ResultView) {
    let block = card();
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(view.rows.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Sentiment Analysis Result",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let headline = Line::from(vec![
        Span::styled(
            format!(" {} ", view.badge),
            Style::default()
                .bg(label_color(view.top_label))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Confidence: {}", view.confidence),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline), rows[1]);

    for (row, area) in view.rows.iter().zip(rows.iter().skip(2)) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*area);
        let caption = Line::from(vec![
            Span::styled(
                format!("{:<10}", format!("{}:", row.label)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{:>6}", row.percent)),
        ]);
        frame.render_widget(Paragraph::new(caption), parts[0]);
        frame.render_widget(
            Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(label_color(row.label))
                        .bg(DEFAULT_THEME.bar_track),
                )
                .label("")
                .ratio(row.value.clamp(0.0, 1.0)),
            parts[1],
        );
    }
}
