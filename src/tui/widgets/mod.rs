/// Widget-based rendering infrastructure for TUI
///
/// Widgets render themselves directly to a ratatui Buffer. Stateless
/// widgets implement [`RenderableWidget`]; the table keeps its cursor
/// between frames and is rendered through `&mut self` instead.

pub mod message;
pub use message::MessagePanel;

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

pub mod table;
pub use table::{Column, DataTable};

pub mod title_bar;
pub use title_bar::TitleBar;

use ratatui::{buffer::Buffer, layout::Rect};

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
