use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::ports::{Scheduler, TimerHandle};

/// Delays a task until no further call arrived for `wait`.
///
/// Every call replaces (and thereby cancels) the pending task.
pub struct Debounce {
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    pending: RefCell<Option<TimerHandle>>,
}

impl Debounce {
    pub fn new(scheduler: Rc<dyn Scheduler>, wait: Duration) -> Self {
        Self {
            scheduler,
            wait,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.set_timeout(self.wait, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(handle) = pending {
            handle.cancel();
        }
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

/// Wraps `f` so that only the last of a burst of calls reaches it.
pub fn debounce<T, F>(scheduler: Rc<dyn Scheduler>, wait: Duration, f: F) -> impl Fn(T)
where
    T: 'static,
    F: Fn(T) + 'static,
{
    let debounce = Debounce::new(scheduler, wait);
    let f = Rc::new(f);
    move |arg| {
        let f = Rc::clone(&f);
        debounce.call(move || f(arg));
    }
}
