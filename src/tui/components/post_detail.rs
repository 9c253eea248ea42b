//! # Post Detail Component
//!
//! The PostDetails screen body: the selected post followed by its comments
//! in one scrollable column. The post card appears once its fetch resolves;
//! the comments area fills in independently, whichever order the two
//! responses arrive in.

use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{Comment, Post};
use crate::tui::component::EventHandler;
use crate::tui::components::avatar;
use crate::tui::event::TuiEvent;

/// Fallbacks for posts that arrive with empty text fields.
const NO_TITLE: &str = "No Title";
const NO_BODY: &str = "No Body";

/// Persistent state for the detail screen (scroll position).
pub struct PostDetailState {
    pub scroll_state: ScrollViewState,
}

impl Default for PostDetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl PostDetailState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
        }
    }
}

impl EventHandler for PostDetailState {
    type Event = (); // Scrolling is handled internally, nothing bubbles up

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// A card measured for ScrollView placement.
struct RenderedCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> RenderedCard<'a> {
    fn bordered(heading: String, accent: Color, content: Text<'a>, width: u16) -> Self {
        let border_style = Style::default().fg(accent).add_modifier(Modifier::DIM);
        let paragraph = Paragraph::new(content)
            .block(
                Block::bordered()
                    .title(heading)
                    .border_style(border_style)
                    .title_style(Style::default().fg(accent))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true });
        let height = paragraph.line_count(width) as u16;
        RenderedCard { paragraph, height }
    }

    fn placeholder(text: &'a str) -> Self {
        let paragraph = Paragraph::new(text).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        RenderedCard {
            paragraph,
            height: 1,
        }
    }
}

/// Transient render wrapper for the detail screen.
pub struct PostDetail<'a> {
    post: Option<&'a Post>,
    comments: &'a [Comment],
    post_loading: bool,
    comments_loading: bool,
    author_colors: bool,
    state: &'a mut PostDetailState,
}

impl<'a> PostDetail<'a> {
    pub fn new(
        post: Option<&'a Post>,
        comments: &'a [Comment],
        post_loading: bool,
        comments_loading: bool,
        author_colors: bool,
        state: &'a mut PostDetailState,
    ) -> Self {
        Self {
            post,
            comments,
            post_loading,
            comments_loading,
            author_colors,
            state,
        }
    }

    fn accent(&self, key: &str) -> Color {
        if self.author_colors {
            avatar::author_color(key)
        } else {
            Color::Gray
        }
    }

    fn post_card(&self, post: &'a Post, width: u16) -> RenderedCard<'a> {
        let author_key = post.user_id.to_string();
        let heading = format!(
            " {} User {} ",
            avatar::author_glyph(&author_key),
            post.user_id
        );

        let title: &str = if post.title.trim().is_empty() {
            NO_TITLE
        } else {
            &post.title
        };
        let body: &str = if post.body.trim().is_empty() {
            NO_BODY
        } else {
            &post.body
        };

        let mut lines = vec![
            Line::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
        ];
        lines.extend(body.lines().map(Line::raw));

        RenderedCard::bordered(heading, self.accent(&author_key), Text::from(lines), width)
    }

    fn comment_card(&self, comment: &'a Comment, width: u16) -> RenderedCard<'a> {
        let heading = format!(
            " {} {} ",
            avatar::author_glyph(&comment.email),
            comment.name
        );
        let lines: Vec<Line> = comment.body.lines().map(Line::raw).collect();
        RenderedCard::bordered(heading, self.accent(&comment.email), Text::from(lines), width)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column

        let mut cards: Vec<RenderedCard> = Vec::new();

        match self.post {
            Some(post) => cards.push(self.post_card(post, content_width)),
            None if self.post_loading => cards.push(RenderedCard::placeholder("Loading post...")),
            // Fetch failed: no post section, the comments still render below.
            None => {}
        }

        if self.comments.is_empty() {
            let text = if self.comments_loading {
                "Loading comments..."
            } else {
                "No comments."
            };
            cards.push(RenderedCard::placeholder(text));
        } else {
            for comment in self.comments {
                cards.push(self.comment_card(comment, content_width));
            }
        }

        let total_height: u16 = cards.iter().map(|c| c.height).sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in &cards {
            let rect = Rect::new(0, y_offset, content_width, card.height);
            scroll_view.render_widget(card.paragraph.clone(), rect);
            y_offset = y_offset.saturating_add(card.height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_comment, sample_post};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(
        post: Option<&Post>,
        comments: &[Comment],
        post_loading: bool,
        comments_loading: bool,
    ) -> String {
        let mut state = PostDetailState::new();
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PostDetail::new(post, comments, post_loading, comments_loading, true, &mut state)
                    .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_post_and_its_comments() {
        let post = sample_post(7);
        let comments = vec![sample_comment(1, 7), sample_comment(2, 7)];
        let text = rendered_text(Some(&post), &comments, false, false);

        assert!(text.contains(&post.title));
        assert!(text.contains(&post.body));
        for comment in &comments {
            assert!(text.contains(&comment.name));
        }
    }

    #[test]
    fn failed_post_renders_no_post_section() {
        // Post fetch failed (not loading, no post) but comments arrived.
        let comments = vec![sample_comment(1, 7)];
        let text = rendered_text(None, &comments, false, false);

        assert!(!text.contains("User"));
        assert!(text.contains(&comments[0].name));
    }

    #[test]
    fn empty_comments_render_zero_rows() {
        let post = sample_post(7);
        let text = rendered_text(Some(&post), &[], false, false);
        assert!(text.contains("No comments."));
    }

    #[test]
    fn loading_placeholders_shown_while_fetches_outstanding() {
        let text = rendered_text(None, &[], true, true);
        assert!(text.contains("Loading post..."));
        assert!(text.contains("Loading comments..."));
    }

    #[test]
    fn empty_title_and_body_fall_back() {
        let mut post = sample_post(7);
        post.title = String::new();
        post.body = "   ".to_string();
        let text = rendered_text(Some(&post), &[], false, false);
        assert!(text.contains(NO_TITLE));
        assert!(text.contains(NO_BODY));
    }

    #[test]
    fn longer_bodies_make_taller_cards() {
        let mut state = PostDetailState::new();
        let short = sample_post(1);
        let mut long = sample_post(2);
        long.body = "line one\nline two\nline three".to_string();

        let detail = PostDetail::new(None, &[], false, false, true, &mut state);
        let short_card = detail.post_card(&short, 60);
        let long_card = detail.post_card(&long, 60);
        assert!(long_card.height > short_card.height);
    }

    #[test]
    fn scroll_events_move_the_offset() {
        let mut state = PostDetailState::new();
        assert_eq!(state.scroll_state.offset().y, 0);
        state.handle_event(&TuiEvent::ScrollDown);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 2);
        state.handle_event(&TuiEvent::ScrollToTop);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
