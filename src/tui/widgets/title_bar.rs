/// TitleBar widget - screen title over a horizontal rule
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::RenderableWidget;

#[derive(Debug, Clone)]
pub struct TitleBar {
    pub title: String,
}

impl TitleBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl RenderableWidget for TitleBar {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let margin = 1u16.min(area.width);
        buf.set_stringn(
            area.x + margin,
            area.y,
            &self.title,
            (area.width - margin) as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if area.height > 1 {
            buf.set_string(area.x, area.y + 1, "─".repeat(area.width as usize), Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
