//! Services - business orchestration on top of the ports.

mod post_service;

pub use post_service::{BlogPostService, IdGenerator, PostService, generate_post_id};
