//! # Application State
//!
//! Core business state for Gazette. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn PostsApi>       // remote data source
//! ├── screen: Screen               // which route is active
//! ├── posts: Vec<Post>             // Home screen list
//! ├── posts_loading: bool          // list fetch in flight
//! ├── post: Option<Post>           // detail screen post
//! ├── comments: Vec<Comment>       // detail screen comments
//! ├── post_loading: bool           // post fetch in flight
//! ├── comments_loading: bool       // comments fetch in flight
//! ├── detail_request: u64          // detail fetch generation
//! ├── source: String               // display name of the API host
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{Comment, Post, PostsApi};

/// The two navigable routes.
///
/// `PostDetails` carries the route's single parameter, the selected post id.
/// There is one directed transition (Home → PostDetails on selection) and a
/// back transition provided by the key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    PostDetails { post_id: u64 },
}

pub struct App {
    pub api: Arc<dyn PostsApi>,
    pub screen: Screen,
    pub posts: Vec<Post>,
    pub posts_loading: bool,
    pub post: Option<Post>,
    pub comments: Vec<Comment>,
    pub post_loading: bool,
    pub comments_loading: bool,
    /// Generation counter for detail fetches. Bumped on every navigation
    /// into (or out of) the detail screen; results tagged with an older
    /// generation are discarded by `update()`.
    pub detail_request: u64,
    /// Display name of the API source, shown in the title bar.
    pub source: String,
    pub status_message: String,
}

impl App {
    pub fn new(api: Arc<dyn PostsApi>, source: String) -> Self {
        Self {
            api,
            screen: Screen::Home,
            posts: Vec::new(),
            posts_loading: false,
            post: None,
            comments: Vec::new(),
            post_loading: false,
            comments_loading: false,
            detail_request: 0,
            source,
            status_message: String::from("Welcome to Gazette!"),
        }
    }
}
