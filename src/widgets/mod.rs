use std::cell::Cell;

pub mod comments;
pub mod search;

pub use self::{comments::*, search::*};

/// Numbers the requests of a widget so that only the
/// response to the latest one gets rendered.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSeq {
    pub fn next(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
