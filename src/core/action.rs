//! # Actions
//!
//! Everything that can happen in Gazette becomes an `Action`.
//! User presses Enter on a row? That's `Action::OpenPost(id)`.
//! The posts fetch resolves? That's `Action::PostsLoaded(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the event loop
//! must perform. No side effects here. Network calls happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions in, assert on the state.
//!
//! ## Stale responses
//!
//! Detail fetch results carry the `request` generation they were spawned
//! with. `update()` only applies a result whose generation matches
//! `App::detail_request`, so a slow response for a previously viewed post
//! can never overwrite the state of the one currently on screen.

use log::{debug, warn};

use crate::api::{ApiError, Comment, Post};
use crate::core::state::{App, Screen};

#[derive(Debug)]
pub enum Action {
    Quit,
    /// Fetch (or re-fetch) the post list. Fired at startup and on the
    /// refresh key.
    RefreshPosts,
    /// Navigate to the detail route with the given post id.
    OpenPost(u64),
    /// Leave the detail route. On Home this exits, matching the host back
    /// behavior of the original client.
    GoBack,
    PostsLoaded(Result<Vec<Post>, ApiError>),
    PostLoaded {
        request: u64,
        result: Result<Post, ApiError>,
    },
    CommentsLoaded {
        request: u64,
        result: Result<Vec<Comment>, ApiError>,
    },
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchPosts,
    /// Spawn the two independent detail fetches (post and comments),
    /// tagged with the given request generation.
    FetchPostDetail { post_id: u64, request: u64 },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::RefreshPosts => {
            app.posts_loading = true;
            app.status_message = String::from("Loading posts...");
            Effect::FetchPosts
        }

        Action::OpenPost(post_id) => {
            app.detail_request += 1;
            app.screen = Screen::PostDetails { post_id };
            app.post = None;
            app.comments.clear();
            app.post_loading = true;
            app.comments_loading = true;
            app.status_message = format!("Loading post {post_id}...");
            Effect::FetchPostDetail {
                post_id,
                request: app.detail_request,
            }
        }

        Action::GoBack => match app.screen {
            Screen::PostDetails { .. } => {
                // Bumping the generation invalidates any in-flight detail
                // fetch for the screen being left.
                app.detail_request += 1;
                app.screen = Screen::Home;
                app.post = None;
                app.comments.clear();
                app.post_loading = false;
                app.comments_loading = false;
                app.status_message = format!("{} posts", app.posts.len());
                Effect::None
            }
            Screen::Home => Effect::Quit,
        },

        Action::PostsLoaded(result) => {
            app.posts_loading = false;
            match result {
                Ok(posts) => {
                    app.status_message = format!("{} posts", posts.len());
                    // Wholesale replacement, no incremental merge.
                    app.posts = posts;
                }
                Err(e) => {
                    warn!("Posts fetch failed: {e}");
                    app.status_message = format!("Posts failed: {e}");
                }
            }
            Effect::None
        }

        Action::PostLoaded { request, result } => {
            if request != app.detail_request {
                debug!(
                    "Discarding stale post response (request {request}, current {})",
                    app.detail_request
                );
                return Effect::None;
            }
            app.post_loading = false;
            match result {
                Ok(post) => {
                    app.status_message.clear();
                    app.post = Some(post);
                }
                Err(e) => {
                    warn!("Post fetch failed: {e}");
                    app.status_message = format!("Post failed: {e}");
                }
            }
            Effect::None
        }

        Action::CommentsLoaded { request, result } => {
            if request != app.detail_request {
                debug!(
                    "Discarding stale comments response (request {request}, current {})",
                    app.detail_request
                );
                return Effect::None;
            }
            app.comments_loading = false;
            match result {
                Ok(comments) => {
                    app.comments = comments;
                }
                Err(e) => {
                    warn!("Comments fetch failed: {e}");
                    app.status_message = format!("Comments failed: {e}");
                }
            }
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_comment, sample_post, test_app};

    fn network_err() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    #[test]
    fn refresh_sets_loading_and_requests_fetch() {
        let mut app = test_app();
        let effect = update(&mut app, Action::RefreshPosts);
        assert_eq!(effect, Effect::FetchPosts);
        assert!(app.posts_loading);
        assert_eq!(app.status_message, "Loading posts...");
    }

    #[test]
    fn posts_loaded_replaces_list_wholesale() {
        let mut app = test_app();
        app.posts = vec![sample_post(99)];
        let fresh = vec![sample_post(1), sample_post(2), sample_post(3)];
        update(&mut app, Action::PostsLoaded(Ok(fresh)));
        assert_eq!(app.posts.len(), 3);
        assert_eq!(app.posts[0].id, 1);
        assert!(!app.posts_loading);
        assert_eq!(app.status_message, "3 posts");
    }

    #[test]
    fn posts_load_failure_leaves_list_and_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::RefreshPosts);
        update(&mut app, Action::PostsLoaded(Err(network_err())));
        assert!(app.posts.is_empty());
        assert!(!app.posts_loading);
        assert!(app.status_message.starts_with("Posts failed:"));
    }

    #[test]
    fn open_post_navigates_with_that_id() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenPost(42));
        assert_eq!(app.screen, Screen::PostDetails { post_id: 42 });
        assert_eq!(
            effect,
            Effect::FetchPostDetail {
                post_id: 42,
                request: 1
            }
        );
        assert!(app.post_loading);
        assert!(app.comments_loading);
        assert!(app.post.is_none());
        assert!(app.comments.is_empty());
    }

    #[test]
    fn reopening_clears_previous_detail_state() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(1));
        update(
            &mut app,
            Action::PostLoaded {
                request: 1,
                result: Ok(sample_post(1)),
            },
        );
        update(
            &mut app,
            Action::CommentsLoaded {
                request: 1,
                result: Ok(vec![sample_comment(10, 1)]),
            },
        );
        update(&mut app, Action::OpenPost(2));
        assert!(app.post.is_none());
        assert!(app.comments.is_empty());
    }

    #[test]
    fn current_generation_results_are_applied() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(7));
        update(
            &mut app,
            Action::PostLoaded {
                request: 1,
                result: Ok(sample_post(7)),
            },
        );
        update(
            &mut app,
            Action::CommentsLoaded {
                request: 1,
                result: Ok(vec![sample_comment(1, 7), sample_comment(2, 7)]),
            },
        );
        assert_eq!(app.post.as_ref().map(|p| p.id), Some(7));
        assert_eq!(app.comments.len(), 2);
        assert!(!app.post_loading);
        assert!(!app.comments_loading);
    }

    #[test]
    fn stale_post_response_does_not_overwrite_newer_navigation() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(1)); // request 1, still in flight
        update(&mut app, Action::OpenPost(2)); // request 2 supersedes it
        update(
            &mut app,
            Action::PostLoaded {
                request: 1,
                result: Ok(sample_post(1)),
            },
        );
        // Stale response discarded: still waiting on post 2.
        assert!(app.post.is_none());
        assert!(app.post_loading);
        update(
            &mut app,
            Action::PostLoaded {
                request: 2,
                result: Ok(sample_post(2)),
            },
        );
        assert_eq!(app.post.as_ref().map(|p| p.id), Some(2));
    }

    #[test]
    fn stale_comments_response_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(1));
        update(&mut app, Action::OpenPost(2));
        update(
            &mut app,
            Action::CommentsLoaded {
                request: 1,
                result: Ok(vec![sample_comment(5, 1)]),
            },
        );
        assert!(app.comments.is_empty());
        assert!(app.comments_loading);
    }

    #[test]
    fn post_failure_renders_no_post_section() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(3));
        update(
            &mut app,
            Action::PostLoaded {
                request: 1,
                result: Err(network_err()),
            },
        );
        assert!(app.post.is_none());
        assert!(!app.post_loading);
        assert!(app.status_message.starts_with("Post failed:"));
    }

    #[test]
    fn comment_failure_is_independent_of_post_success() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(3));
        update(
            &mut app,
            Action::CommentsLoaded {
                request: 1,
                result: Err(network_err()),
            },
        );
        update(
            &mut app,
            Action::PostLoaded {
                request: 1,
                result: Ok(sample_post(3)),
            },
        );
        // The post still renders even though its comments failed.
        assert!(app.post.is_some());
        assert!(app.comments.is_empty());
    }

    #[test]
    fn empty_comments_are_fine() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(3));
        update(
            &mut app,
            Action::CommentsLoaded {
                request: 1,
                result: Ok(Vec::new()),
            },
        );
        assert!(app.comments.is_empty());
        assert!(!app.comments_loading);
    }

    #[test]
    fn go_back_returns_home_and_invalidates_fetches() {
        let mut app = test_app();
        update(&mut app, Action::OpenPost(9));
        let generation = app.detail_request;
        let effect = update(&mut app, Action::GoBack);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen, Screen::Home);
        assert!(app.detail_request > generation);
        // A late result from the abandoned screen is ignored.
        update(
            &mut app,
            Action::PostLoaded {
                request: generation,
                result: Ok(sample_post(9)),
            },
        );
        assert!(app.post.is_none());
    }

    #[test]
    fn go_back_on_home_quits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::GoBack), Effect::Quit);
    }

    #[test]
    fn quit_action_quits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
