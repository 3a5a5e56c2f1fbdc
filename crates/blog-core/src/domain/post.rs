use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Post entity - represents a blog post.
///
/// `Clone` is the copy boundary of the store: every value handed to or
/// returned from a repository is an independent clone, so callers never share
/// memory with the canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Free-form; empty when unset.
    pub publication_date: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Assemble a post under an already generated identity.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
            publication_date: publication_date.into(),
            tags,
        }
    }

    /// Structural validation: title, content and author must be non-empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.is_empty() || self.content.is_empty() || self.author.is_empty() {
            return Err(DomainError::InvalidInput);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new("id-1", "title", "content", "author", "", Vec::new())
    }

    #[test]
    fn test_validate_accepts_complete_post() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_missing_required_fields() {
        let mut no_title = sample();
        no_title.title.clear();
        let mut no_content = sample();
        no_content.content.clear();
        let mut no_author = sample();
        no_author.author.clear();

        for post in [no_title, no_content, no_author] {
            assert_eq!(post.validate(), Err(DomainError::InvalidInput));
        }
    }

    #[test]
    fn test_validate_ignores_optional_fields() {
        let mut post = sample();
        post.publication_date = "not a date".to_string();
        post.tags = vec![String::new()];
        assert!(post.validate().is_ok());
    }
}
