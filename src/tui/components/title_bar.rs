//! # TitleBar Component
//!
//! Top status bar showing the API source and transient status text.
//!
//! ## Responsibilities
//!
//! - Display the source host the posts come from
//! - Display status messages (e.g. "Loading posts...", "42 posts")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state, which makes it trivial to test and reason about.
//!
//! ### Props-in-Struct Pattern
//!
//! Rather than passing props as render() parameters, we store them as struct
//! fields. The Component trait requires a fixed render() signature, so props
//! have to travel with the struct.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Gazette (gorest.co.in/public/v2) | 42 posts"`
//! 2. **Default**: `"Gazette (gorest.co.in/public/v2)"`

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

/// Top status bar component showing the API source and status text.
///
/// # Props
///
/// - `source`: Display name of the remote source (host + path, no scheme)
/// - `status_message`: Transient status (e.g. "Loading posts...")
pub struct TitleBar {
    pub source: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(source: String, status_message: String) -> Self {
        Self {
            source,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Gazette ({})", self.source)
        } else {
            format!("Gazette ({}) | {}", self.source, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
