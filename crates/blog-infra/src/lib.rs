//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Only an in-memory store exists today; data is lost on process restart.

pub mod repository;

pub use repository::InMemoryPostRepository;
