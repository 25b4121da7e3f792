pub mod debounce;
pub mod text;
pub mod time;

pub use self::{
    debounce::{debounce, Debounce},
    text::{truncate, DEFAULT_TRUNCATE_LENGTH},
    time::{format_comment_date, format_date, parse_timestamp},
};
