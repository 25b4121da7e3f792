use std::borrow::Cow;

pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;

const ELLIPSIS: &str = "...";

/// Cuts `text` after `length` characters and appends an ellipsis.
#[must_use]
pub fn truncate(text: &str, length: usize) -> Cow<'_, str> {
    match text.char_indices().nth(length) {
        None => Cow::Borrowed(text),
        Some((end, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..end])),
    }
}
