//! # Post List Component
//!
//! The Home screen body: a selectable list of the fetched posts. Each row
//! shows the author badge, the post title, and a one-line body preview.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PostListState` lives in `TuiState`
//! - `PostList` is created each frame with borrowed state and props

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Post;
use crate::tui::components::avatar;
use crate::tui::event::TuiEvent;

/// Persistent state for the Home screen list.
pub struct PostListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for PostListState {
    fn default() -> Self {
        Self::new()
    }
}

impl PostListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event against the given posts, returning an event when
    /// the list wants the app to act.
    pub fn handle_event(&mut self, event: &TuiEvent, posts: &[Post]) -> Option<PostListEvent> {
        match event {
            TuiEvent::CursorUp => {
                if !posts.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !posts.is_empty() {
                    self.selected = (self.selected + 1).min(posts.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => posts
                .get(self.selected)
                .map(|post| PostListEvent::Open(post.id)),
            _ => None,
        }
    }

    /// Clamp the selection after the post list changes size.
    pub fn sync(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Events emitted by the post list.
pub enum PostListEvent {
    /// Open the detail route for the given post id.
    Open(u64),
}

/// Transient render wrapper for the Home screen list.
pub struct PostList<'a> {
    posts: &'a [Post],
    loading: bool,
    author_colors: bool,
    state: &'a mut PostListState,
}

impl<'a> PostList<'a> {
    pub fn new(
        posts: &'a [Post],
        loading: bool,
        author_colors: bool,
        state: &'a mut PostListState,
    ) -> Self {
        Self {
            posts,
            loading,
            author_colors,
            state,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.posts.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Posts ")
            .padding(Padding::horizontal(1));

        if self.posts.is_empty() {
            let text = if self.loading {
                "Loading posts..."
            } else {
                "No posts."
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .posts
            .iter()
            .enumerate()
            .map(|(i, post)| self.render_row(i, post, inner_width))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn render_row(&self, index: usize, post: &'a Post, inner_width: usize) -> ListItem<'a> {
        let selected = index == self.state.selected;
        let author_key = post.user_id.to_string();
        let accent = if self.author_colors {
            avatar::author_color(&author_key)
        } else {
            Color::Gray
        };

        let badge = format!("{} User {}", avatar::author_glyph(&author_key), post.user_id);
        // Layout: "<badge>  <title>" then an indented body preview.
        let title_width = inner_width.saturating_sub(badge.width() + 2);
        let title = truncate_str(&post.title, title_width);
        let preview = truncate_str(
            &post.body.split_whitespace().collect::<Vec<_>>().join(" "),
            inner_width.saturating_sub(2),
        );

        let (badge_style, title_style, preview_style) = if selected {
            let base = Style::default().add_modifier(Modifier::REVERSED);
            (
                base.fg(accent),
                base.fg(Color::White).add_modifier(Modifier::BOLD),
                base.fg(Color::Gray),
            )
        } else {
            (
                Style::default().fg(accent),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::DarkGray),
            )
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(badge, badge_style),
                Span::styled("  ", title_style),
                Span::styled(title, title_style),
            ]),
            Line::from(vec![
                Span::styled("  ", preview_style),
                Span::styled(preview, preview_style),
            ]),
        ];

        ListItem::new(lines)
    }
}

/// Truncate a string to fit within `max_width` terminal columns, adding
/// "..." if anything was cut.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
