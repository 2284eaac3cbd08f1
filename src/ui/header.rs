use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::APP_TITLE;

pub fn draw_header(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(APP_TITLE)
        .style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    f.render_widget(title, area);
}
