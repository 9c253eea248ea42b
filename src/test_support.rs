//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, Comment, Post, PostsApi};
use crate::core::state::App;

/// A canned in-memory `PostsApi` for tests that don't need real HTTP.
pub struct StaticApi {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    /// When set, every call fails with a network error.
    pub fail: bool,
}

impl Default for StaticApi {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            comments: Vec::new(),
            fail: false,
        }
    }
}

#[async_trait]
impl PostsApi for StaticApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        if self.fail {
            return Err(ApiError::Network("static failure".to_string()));
        }
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        if self.fail {
            return Err(ApiError::Network("static failure".to_string()));
        }
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Api {
                status: 404,
                message: "not found".to_string(),
            })
    }

    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        if self.fail {
            return Err(ApiError::Network("static failure".to_string()));
        }
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

pub fn sample_post(id: u64) -> Post {
    Post {
        id,
        user_id: 100 + id,
        title: format!("Post {id} title"),
        body: format!("Body of post {id}."),
    }
}

pub fn sample_comment(id: u64, post_id: u64) -> Comment {
    Comment {
        id,
        post_id,
        name: format!("Commenter {id}"),
        email: format!("commenter{id}@example.com"),
        body: format!("Comment {id} on post {post_id}."),
    }
}

/// Creates a test App backed by an empty StaticApi.
pub fn test_app() -> App {
    App::new(Arc::new(StaticApi::default()), "test.example".to_string())
}
