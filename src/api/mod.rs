pub mod client;
pub mod types;

pub use client::{ApiError, PostsApi, RestClient};
pub use types::{Comment, Post};
