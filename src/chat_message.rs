use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

use crate::constants::USER_LABEL;

/// A single entry in the transcript. Immutable once created.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    text: String,
    sender: String,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
            timestamp: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn from_user(&self) -> bool {
        self.sender == USER_LABEL
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.base_style();

        self.render_header(&mut lines, base_style);
        self.render_body(&mut lines, area, base_style);
        self.render_footer(&mut lines, base_style);

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(if self.from_user() {
            Color::Rgb(255, 223, 128)
        } else {
            Color::Rgb(144, 238, 144)
        })
    }

    // User messages are indented so the two sides read like bubbles.
    fn indent(&self) -> &'static str {
        if self.from_user() {
            "  "
        } else {
            ""
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = self.timestamp.format("%H:%M").to_string();

        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(
                self.sender.clone(),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
        ]));
    }

    fn render_body(&self, lines: &mut Vec<Line<'static>>, area: Rect, style: Style) {
        let wrap_width = (area.width as usize).saturating_sub(4).max(1);

        for source_line in self.text.lines() {
            if source_line.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(self.indent().to_string(), style),
                    Span::styled("│".to_string(), style),
                ]));
                continue;
            }
            for wrapped in wrap(source_line, wrap_width) {
                lines.push(Line::from(vec![
                    Span::styled(self.indent().to_string(), style),
                    Span::styled("│ ".to_string(), style),
                    Span::styled(wrapped.to_string(), style),
                ]));
            }
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}
