use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::App;

pub fn draw_chat(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Transcript
                Constraint::Length(1), // Pending indicator
                Constraint::Length(3), // Input
            ]
            .as_ref(),
        )
        .split(area);

    draw_messages(f, app, chunks[0]);
    app.status_indicator.render(f, chunks[1]);
    draw_input(f, app, chunks[2]);
}

fn draw_messages(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.transcript.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }

    // Writing the clamped value back keeps the view stuck to the end
    // after a push while still letting PgUp walk backwards from it.
    app.scroll = clamp_scroll(lines.len(), area.height, app.scroll);

    let transcript = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(transcript.scroll((app.scroll, 0)), area);
}

fn clamp_scroll(total_lines: usize, viewport_height: u16, scroll: u16) -> u16 {
    // Transcripts taller than u16 saturate instead of wrapping, so the
    // clamp never snaps an end-stuck view back toward the top.
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    scroll.min(total.saturating_sub(viewport_height))
}

fn draw_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(&app.input, Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );

    // A full input line would otherwise place the cursor one column
    // past the right edge.
    let cursor_x = (area.x + 2 + text_width - scroll_offset).min(area.right().saturating_sub(1));
    f.set_cursor_position((cursor_x, area.y + 1));
}
