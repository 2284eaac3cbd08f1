use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Flashing-dot loading indicator, shown while a request is outstanding.
#[derive(Debug)]
pub struct StatusIndicator {
    thinking: bool,
    frame_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            thinking: false,
            frame_idx: 0,
        }
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn advance(&mut self) {
        self.frame_idx = self.frame_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.thinking {
            return;
        }

        let dot_frames = ["●∙∙", "∙●∙", "∙∙●"];
        let dots = dot_frames[self.frame_idx % dot_frames.len()];

        let line = Line::from(vec![
            Span::styled(dots, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled("Thinking...", Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
