use casebook_boundary::NewComment;
use thiserror::Error;

use crate::config::{MAX_AUTHOR_CHARS, MAX_COMMENT_CHARS};

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentInvalidation {
    #[error("Please enter your name and a comment.")]
    Empty,
    #[error("Your name must not exceed 100 characters.")]
    AuthorTooLong,
    #[error("Your comment must not exceed 1000 characters.")]
    ContentTooLong,
}

impl AutoCorrect for NewComment {
    fn auto_correct(self) -> Self {
        let Self { author, content } = self;
        Self {
            author: author.trim().to_string(),
            content: content.trim().to_string(),
        }
    }
}

impl Validate for NewComment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.author.trim().is_empty() || self.content.trim().is_empty() {
            return Err(Self::Error::Empty);
        }
        if self.author.chars().count() > MAX_AUTHOR_CHARS {
            return Err(Self::Error::AuthorTooLong);
        }
        if self.content.chars().count() > MAX_COMMENT_CHARS {
            return Err(Self::Error::ContentTooLong);
        }
        Ok(())
    }
}
