/// StatusBar widget - displays keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator
/// - Bottom line: key hints on the left │ context text on the right
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "enter", "q")
    pub key: String,
    /// The action description (e.g., "quit")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub hints: Vec<KeyHint>,
    /// Right-aligned context, e.g. the season being shown
    pub context: String,
}

impl StatusBar {
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self {
            hints,
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Segments of the hint line as (text, style)
    fn hint_segments(&self) -> Vec<(String, Style)> {
        let mut segments = vec![(" ".to_string(), Style::default())];
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                segments.push(("  ".to_string(), Style::default()));
            }
            segments.push((hint.key.clone(), Style::default().add_modifier(Modifier::BOLD)));
            segments.push((format!(" {}", hint.action), Style::default()));
        }
        segments
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        buf.set_string(area.x, area.y, "─".repeat(area.width as usize), Style::default());

        let y = area.y + 1;
        let right = if self.context.is_empty() {
            String::new()
        } else {
            format!("│ {} ", self.context)
        };
        let right_width = right.width() as u16;
        let left_limit = area.right().saturating_sub(right_width);

        let mut x = area.x;
        for (text, style) in self.hint_segments() {
            if x >= left_limit {
                break;
            }
            let (next_x, _) = buf.set_stringn(x, y, &text, (left_limit - x) as usize, style);
            x = next_x;
        }

        if right_width > 0 && right_width <= area.width {
            buf.set_string(left_limit, y, &right, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
