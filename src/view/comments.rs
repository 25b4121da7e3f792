use casebook_boundary::Comment;
use maud::{html, Markup, Render};
use time::OffsetDateTime;

use super::notice;
use crate::util::format_comment_date;

pub const EMPTY_MESSAGE: &str = "No comments yet. Be the first to comment!";

/// View model of a single comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentItem<'a> {
    pub author: &'a str,
    pub date: String,
    pub content: &'a str,
}

impl<'a> CommentItem<'a> {
    #[must_use]
    pub fn new(comment: &'a Comment, now: OffsetDateTime) -> Self {
        let date = comment
            .created_at
            .as_deref()
            .map(|created_at| format_comment_date(created_at, now))
            .unwrap_or_default();
        Self {
            author: &comment.author,
            date,
            content: &comment.content,
        }
    }
}

impl Render for CommentItem<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="comment-item" {
                div class="comment-header" {
                    span class="comment-author" { (self.author) }
                    span class="comment-date" { (self.date) }
                }
                div class="comment-content" { (self.content) }
            }
        }
    }
}

#[must_use]
pub fn comment_list(comments: &[Comment], now: OffsetDateTime) -> Markup {
    if comments.is_empty() {
        return notice("empty-state", EMPTY_MESSAGE);
    }
    html! {
        @for comment in comments {
            (CommentItem::new(comment, now))
        }
    }
}

#[must_use]
pub fn load_error(reason: &str) -> Markup {
    notice("error-message", &format!("Failed to load comments: {reason}"))
}
