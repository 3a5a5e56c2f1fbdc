//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the post model, the error taxonomy, the repository
//! port and the post service. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::Post;
pub use error::{DomainError, DomainResult};
pub use ports::PostRepository;
pub use service::{BlogPostService, PostService};
