use thiserror::Error;

mod public;
mod util;

pub use self::{public::*, util::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Fetch(String),

    /// The server answered with an error message.
    #[error("{0}")]
    Api(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Fetch(format!("Invalid response: {err}"))
    }
}

impl From<casebook_boundary::Error> for Error {
    fn from(err: casebook_boundary::Error) -> Self {
        Self::Api(err.error)
    }
}
