/// MessagePanel widget - centered placeholder text for loading and error states
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;

#[derive(Debug, Clone)]
pub struct MessagePanel {
    lines: Vec<String>,
    style: Style,
}

impl MessagePanel {
    pub fn loading(what: &str) -> Self {
        Self {
            lines: vec![format!("Loading {}...", what)],
            style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Error text plus an optional hint line underneath
    pub fn error(message: &str, hint: Option<String>) -> Self {
        let mut lines = vec![format!("Error: {}", message)];
        lines.extend(hint);
        Self {
            lines,
            style: Style::default().fg(Color::Red),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl RenderableWidget for MessagePanel {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let height = self.lines.len() as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;

        for (i, line) in self.lines.iter().enumerate() {
            let y = top + i as u16;
            if y >= area.bottom() {
                break;
            }
            let width = line.width() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            buf.set_stringn(x, y, line, (area.right() - x) as usize, self.style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.lines.len() as u16)
    }
}
