use std::rc::Rc;

use casebook_boundary::NewComment;
use time::OffsetDateTime;

use super::RequestSeq;
use crate::{
    api::CommentsApi,
    ports::{Button, Dialog, Region, TextField},
    validate::{AutoCorrect, Validate},
    view::comments::{comment_list, load_error},
};

pub const SUBMIT_LABEL: &str = "Post comment";
pub const SUBMIT_BUSY_LABEL: &str = "Posting...";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Your comment has been posted!";
pub const NO_ARTICLE_MESSAGE: &str = "Comments are not available on this page.";

/// The DOM elements of the comment section.
pub struct CommentElements {
    pub list: Rc<dyn Region>,
    pub author: Rc<dyn TextField>,
    pub content: Rc<dyn TextField>,
    pub submit: Rc<dyn Button>,
}

/// Lists the comments of an article and posts new ones.
pub struct CommentWidget<A> {
    api: A,
    article_id: Option<String>,
    elements: CommentElements,
    dialog: Rc<dyn Dialog>,
    seq: RequestSeq,
    clock: fn() -> OffsetDateTime,
}

impl<A> CommentWidget<A>
where
    A: CommentsApi,
{
    pub fn new(
        api: A,
        article_id: Option<String>,
        elements: CommentElements,
        dialog: Rc<dyn Dialog>,
    ) -> Self {
        Self {
            api,
            article_id,
            elements,
            dialog,
            seq: RequestSeq::default(),
            clock: OffsetDateTime::now_utc,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub async fn load_comments(&self) {
        let Some(article_id) = self.article_id.as_deref() else {
            return;
        };
        let ticket = self.seq.next();
        log::debug!("Load comments of article {article_id}");
        let result = self.api.comments(article_id).await;
        if !self.seq.is_latest(ticket) {
            log::debug!("Discard outdated comments of article {article_id}");
            return;
        }
        let markup = match result {
            Ok(comments) => comment_list(&comments, (self.clock)()),
            Err(err) => {
                log::warn!("Unable to load comments: {err}");
                load_error(&err.to_string())
            }
        };
        self.elements.list.render(markup);
    }

    /// Submits the current content of the form fields.
    pub async fn submit(&self) {
        let author = self.elements.author.value();
        let content = self.elements.content.value();
        self.submit_comment(&author, &content).await;
    }

    pub async fn submit_comment(&self, author: &str, content: &str) {
        let new_comment = NewComment {
            author: author.to_string(),
            content: content.to_string(),
        }
        .auto_correct();
        if let Err(err) = new_comment.validate() {
            self.dialog.alert(&err.to_string());
            return;
        }
        let Some(article_id) = self.article_id.as_deref() else {
            log::error!("Unable to submit comment: no article ID");
            self.dialog.alert(NO_ARTICLE_MESSAGE);
            return;
        };
        let _busy = BusyGuard::engage(self.elements.submit.as_ref());
        log::debug!("Submit comment on article {article_id}");
        match self.api.create_comment(article_id, &new_comment).await {
            Ok(()) => {
                self.elements.content.set_value("");
                self.load_comments().await;
                self.dialog.alert(SUBMIT_SUCCESS_MESSAGE);
            }
            Err(err) => {
                log::warn!("Unable to submit comment: {err}");
                self.dialog.alert(&format!("Failed to post comment: {err}"));
            }
        }
    }
}

/// Keeps the submit button disabled while alive.
struct BusyGuard<'a> {
    button: &'a dyn Button,
}

impl<'a> BusyGuard<'a> {
    fn engage(button: &'a dyn Button) -> Self {
        button.set_disabled(true);
        button.set_label(SUBMIT_BUSY_LABEL);
        Self { button }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.set_disabled(false);
        self.button.set_label(SUBMIT_LABEL);
    }
}
