use std::rc::Rc;

use super::RequestSeq;
use crate::{
    api::SearchApi,
    config::{LIVE_SEARCH_DELAY, LIVE_SEARCH_MIN_CHARS},
    history::SearchHistory,
    ports::{Region, Scheduler, Spawner, TextField},
    util::Debounce,
    view::search::{hint, loading, search_error, search_results},
};

/// The DOM elements of the search box.
pub struct SearchElements {
    pub input: Rc<dyn TextField>,
    pub results: Rc<dyn Region>,
}

/// Searches articles and remembers the recent queries.
pub struct SearchWidget<A> {
    api: A,
    elements: SearchElements,
    history: SearchHistory,
    seq: RequestSeq,
    live_search: Debounce,
    spawner: Rc<dyn Spawner>,
}

impl<A> SearchWidget<A>
where
    A: SearchApi + 'static,
{
    pub fn new(
        api: A,
        elements: SearchElements,
        history: SearchHistory,
        scheduler: Rc<dyn Scheduler>,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        Self {
            api,
            elements,
            history,
            seq: RequestSeq::default(),
            live_search: Debounce::new(scheduler, LIVE_SEARCH_DELAY),
            spawner,
        }
    }

    pub fn focus(&self) {
        self.elements.input.focus();
    }

    /// Searches for the current content of the input field.
    pub async fn search_input(&self) {
        let query = self.elements.input.value();
        self.perform_search(&query).await;
    }

    pub async fn perform_search(&self, query: &str) {
        let query = query.trim();
        let ticket = self.seq.next();
        if query.is_empty() {
            self.elements.results.render(hint());
            return;
        }
        self.elements.results.render(loading());
        log::debug!("Search for '{query}'");
        let result = self.api.search(query).await;
        if !self.seq.is_latest(ticket) {
            log::debug!("Discard outdated results for '{query}'");
            return;
        }
        match result {
            Ok(articles) => {
                self.elements.results.render(search_results(query, &articles));
                if let Err(err) = self.history.save(query) {
                    log::warn!("Unable to save search history: {err}");
                }
            }
            Err(err) => {
                log::warn!("Search for '{query}' failed: {err}");
                self.elements.results.render(search_error(&err.to_string()));
            }
        }
    }

    /// Recent queries, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.load()
    }

    pub fn on_search_button(self: &Rc<Self>) {
        self.spawn_search();
    }

    pub fn on_key(self: &Rc<Self>, key: &str) {
        if key == "Enter" {
            self.spawn_search();
        }
    }

    /// Starts a live search once typing paused.
    pub fn on_input(self: &Rc<Self>) {
        let widget = Rc::downgrade(self);
        self.live_search.call(move || {
            let Some(widget) = widget.upgrade() else {
                return;
            };
            if is_live_query(&widget.elements.input.value()) {
                widget.spawn_search();
            }
        });
    }

    fn spawn_search(self: &Rc<Self>) {
        let widget = Rc::clone(self);
        self.spawner.spawn(Box::pin(async move {
            widget.search_input().await;
        }));
    }
}

fn is_live_query(input: &str) -> bool {
    input.trim().chars().count() >= LIVE_SEARCH_MIN_CHARS
}
