//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter in the future
//! if needed.
//!
//! ## Event Loop
//!
//! One loop owns all state. Each iteration draws (only when something
//! changed), polls the terminal for up to 250ms, drains pending terminal
//! events, then drains fetch results delivered by background tasks over an
//! mpsc channel. Fetches themselves run as tokio tasks spawned in response
//! to `Effect` values from the reducer; the loop never blocks on the
//! network.

mod component;
mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{mpsc, Arc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{PostsApi, RestClient};
use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{PostDetailState, PostListEvent, PostListState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub post_list: PostListState,
    pub post_detail: PostDetailState,
    pub author_colors: bool,
}

impl TuiState {
    pub fn new(author_colors: bool) -> Self {
        Self {
            post_list: PostListState::new(),
            post_detail: PostDetailState::new(),
            author_colors,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel scrolling in both screens
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Strip the scheme from the base URL for title bar display.
fn display_source(base_url: &str) -> String {
    base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string()
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = RestClient::new(config.base_url.clone(), config.request_timeout)
        .map_err(std::io::Error::other)?;
    let api: Arc<dyn PostsApi> = Arc::new(client);
    let mut app = App::new(api, display_source(&config.base_url));
    let mut tui = TuiState::new(config.author_colors);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the in-flight detail fetches; superseded fetches are
    // aborted when the user navigates again before they resolve.
    let mut detail_abort_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    // Home mount: load the post list immediately
    let effect = update(&mut app, Action::RefreshPosts);
    perform_effect(effect, &app, &tx, &mut detail_abort_handles);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // Quit keys work on both screens
            if matches!(tui_event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Back leaves the detail screen; from Home it exits
            if matches!(tui_event, TuiEvent::Back) {
                match update(&mut app, Action::GoBack) {
                    Effect::Quit => should_quit = true,
                    effect => perform_effect(effect, &app, &tx, &mut detail_abort_handles),
                }
                continue;
            }

            // Refresh re-fetches the post list from Home
            if matches!(tui_event, TuiEvent::Refresh) {
                if app.screen == Screen::Home && !app.posts_loading {
                    let effect = update(&mut app, Action::RefreshPosts);
                    perform_effect(effect, &app, &tx, &mut detail_abort_handles);
                }
                continue;
            }

            // Everything else goes to the active screen's component
            match app.screen {
                Screen::Home => {
                    if let Some(PostListEvent::Open(post_id)) =
                        tui.post_list.handle_event(&tui_event, &app.posts)
                    {
                        let effect = update(&mut app, Action::OpenPost(post_id));
                        perform_effect(effect, &app, &tx, &mut detail_abort_handles);
                        // Fresh scroll position for the new detail screen
                        tui.post_detail = PostDetailState::new();
                    }
                }
                Screen::PostDetails { .. } => {
                    tui.post_detail.handle_event(&tui_event);
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                effect => perform_effect(effect, &app, &tx, &mut detail_abort_handles),
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn perform_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    detail_abort_handles: &mut Vec<tokio::task::AbortHandle>,
) {
    match effect {
        Effect::FetchPosts => spawn_fetch_posts(app.api.clone(), tx.clone()),
        Effect::FetchPostDetail { post_id, request } => {
            // Supersede the previous detail fetches before spawning new
            // ones. Their results would be discarded by the generation
            // guard anyway; aborting stops the network work itself.
            for handle in detail_abort_handles.drain(..) {
                handle.abort();
            }
            *detail_abort_handles = spawn_fetch_detail(app.api.clone(), post_id, request, tx.clone());
        }
        Effect::None | Effect::Quit => {}
    }
}

fn spawn_fetch_posts(api: Arc<dyn PostsApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning posts fetch");
    tokio::spawn(async move {
        let result = api.list_posts().await;
        if tx.send(Action::PostsLoaded(result)).is_err() {
            warn!("Failed to send posts result: receiver dropped");
        }
    });
}

/// Spawns the two detail fetches as independent tasks. They share nothing
/// and may complete in either order; each reports its own result tagged
/// with the request generation.
fn spawn_fetch_detail(
    api: Arc<dyn PostsApi>,
    post_id: u64,
    request: u64,
    tx: mpsc::Sender<Action>,
) -> Vec<tokio::task::AbortHandle> {
    info!("Spawning detail fetches for post {post_id} (request {request})");

    let post_handle = tokio::spawn({
        let api = api.clone();
        let tx = tx.clone();
        async move {
            let result = api.get_post(post_id).await;
            if tx.send(Action::PostLoaded { request, result }).is_err() {
                warn!("Failed to send post result: receiver dropped");
            }
        }
    });

    let comments_handle = tokio::spawn(async move {
        let result = api.list_comments(post_id).await;
        if tx.send(Action::CommentsLoaded { request, result }).is_err() {
            warn!("Failed to send comments result: receiver dropped");
        }
    });

    vec![post_handle.abort_handle(), comments_handle.abort_handle()]
}
