//! The parts of the page the widgets talk to.
//!
//! Browser implementations live in [`crate::dom`].

use std::time::Duration;

use futures::future::LocalBoxFuture;
use maud::Markup;

/// A DOM region owned by a widget.
///
/// Only rendered [`Markup`] is accepted, so all
/// interpolated text has been escaped before it
/// reaches the document.
pub trait Region {
    fn render(&self, markup: Markup);
}

pub trait TextField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn focus(&self);
}

pub trait Button {
    fn set_disabled(&self, disabled: bool);
    fn set_label(&self, label: &str);
}

pub trait Dialog {
    fn alert(&self, message: &str);
}

pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
}

pub trait Scheduler {
    /// Runs `task` once after `wait` unless the returned handle is dropped before.
    fn set_timeout(&self, wait: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;

    /// Runs `task` once after `wait`; cannot be cancelled.
    fn defer(&self, wait: Duration, task: Box<dyn FnOnce()>);
}

pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Pending timeout; dropping it cancels the timeout.
#[must_use]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
