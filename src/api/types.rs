use serde::{Deserialize, Serialize};

/// A post as the remote API returns it.
///
/// Mirrors the wire shape directly. The client trusts the remote contract;
/// a body that fails to decode surfaces as `ApiError::Parse`, not as a
/// field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment attached to a post.
///
/// The comment → post relationship is resolved purely by the `post_id`
/// query parameter on the comments endpoint; there is no local join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_from_api_shape() {
        let json = r#"{"id":7,"user_id":42,"title":"Hello","body":"World"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, 42);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "World");
    }

    #[test]
    fn post_ignores_unknown_fields() {
        // The remote API may grow fields; decoding must not break.
        let json = r#"{"id":1,"user_id":2,"title":"t","body":"b","status":"published"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 1);
    }

    #[test]
    fn comment_decodes_from_api_shape() {
        let json = r#"{"id":3,"post_id":7,"name":"Ada","email":"ada@example.com","body":"Nice."}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 7);
        assert_eq!(comment.name, "Ada");
        assert_eq!(comment.email, "ada@example.com");
    }

    #[test]
    fn post_array_decodes() {
        let json = r#"[
            {"id":1,"user_id":10,"title":"a","body":"aa"},
            {"id":2,"user_id":11,"title":"b","body":"bb"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].id, 2);
    }

    #[test]
    fn empty_comment_array_decodes() {
        let comments: Vec<Comment> = serde_json::from_str("[]").unwrap();
        assert!(comments.is_empty());
    }
}
