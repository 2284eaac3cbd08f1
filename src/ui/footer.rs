use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draws the footer with key hints.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect) {
    let instructions =
        "Type your question and press Enter to send. PgUp/PgDn to scroll, Esc to quit.";

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
