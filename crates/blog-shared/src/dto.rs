//! Data Transfer Objects - request/response messages of the blog RPC surface.
//!
//! Missing string fields decode as empty and missing tags as an empty list,
//! so validation happens in the service rather than in the decoder.

use serde::{Deserialize, Serialize};

use blog_core::domain::Post;

/// Wire representation of a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMessage {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: String,
    pub tags: Vec<String>,
}

impl From<Post> for PostMessage {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            publication_date: post.publication_date,
            tags: post.tags,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publication_date: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub post: PostMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPostRequest {
    pub post_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostResponse {
    pub post: PostMessage,
}

/// Update carries no publication date; the stored one is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostResponse {
    pub post: PostMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletePostRequest {
    pub post_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub success: bool,
}
