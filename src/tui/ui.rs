use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{PostDetail, PostList, TitleBar};
use crate::tui::TuiState;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::Frame;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(app.source.clone(), app.status_message.clone());
    title_bar.render(frame, title_area);

    match app.screen {
        Screen::Home => {
            PostList::new(
                &app.posts,
                app.posts_loading,
                tui.author_colors,
                &mut tui.post_list,
            )
            .render(frame, main_area);
        }
        Screen::PostDetails { .. } => {
            PostDetail::new(
                app.post.as_ref(),
                &app.comments,
                app.post_loading,
                app.comments_loading,
                tui.author_colors,
                &mut tui.post_detail,
            )
            .render(frame, main_area);
        }
    }

    draw_hint_bar(frame, hint_area, &app.screen);
}

fn draw_hint_bar(frame: &mut Frame, area: Rect, screen: &Screen) {
    let hints = match screen {
        Screen::Home => " ↑/↓ Select  Enter Open  r Refresh  q Quit ",
        Screen::PostDetails { .. } => " ↑/↓ Scroll  Esc Back  q Quit ",
    };
    frame.render_widget(
        Line::from(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
