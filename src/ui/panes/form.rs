//! Analyzer card: heading, text area and submit button

use crate::ui::form::InputForm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "Enter text to analyze sentiment...";

/// Render the input card
pub fn render_form_pane(frame: &mut Frame, area: Rect, form: &InputForm, loading: bool) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(DEFAULT_THEME.card_bg).fg(DEFAULT_THEME.fg));
    let inner = card.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Sentiment Analyzer",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Type or paste a sentence, review, or comment to see its sentiment:",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        rows[1],
    );

    // Text area
    let text_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if loading {
            DEFAULT_THEME.border_normal
        } else {
            DEFAULT_THEME.border_focused
        }));
    let text_height = text_block.inner(rows[2]).height as usize;
    let body = if form.text().is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(DEFAULT_THEME.placeholder),
        ))
    } else {
        // Keep the end of the text (where the cursor is) in view
        let lines: Vec<Line> = form.text().split('\n').map(Line::raw).collect();
        let skip = lines.len().saturating_sub(text_height.max(1));
        let mut visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        if !loading {
            if let Some(last) = visible.last_mut() {
                last.push_span(Span::styled("▏", Style::default().fg(DEFAULT_THEME.primary)));
            }
        }
        Paragraph::new(visible).wrap(Wrap { trim: false })
    };
    frame.render_widget(body.block(text_block), rows[2]);

    // Submit button, dimmed while there is nothing to send
    let (label, style) = if loading {
        (
            "Analyzing...",
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::White),
        )
    } else if form.is_blank() {
        (
            "Analyze Sentiment (Enter)",
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::White),
        )
    } else {
        (
            "Analyze Sentiment (Enter)",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style),
        rows[3],
    );
}
