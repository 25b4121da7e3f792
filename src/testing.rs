//! In-memory stand-ins for the browser and the API.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
    time::Duration,
};

use async_trait::async_trait;
use futures::{
    channel::oneshot,
    executor::LocalSpawner,
    future::LocalBoxFuture,
    task::LocalSpawnExt,
};
use gloo_storage::errors::StorageError;
use maud::Markup;

use casebook_boundary::{Article, Comment, NewComment};
use casebook_frontend_api::{Error, Result};

use crate::{
    api::{CommentsApi, SearchApi},
    history::HistoryStore,
    ports::{Button, Dialog, Region, Scheduler, Spawner, StyleTarget, TextField, TimerHandle},
};

// -- timers -- //

struct ScheduledTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

/// Timers that only advance when told to.
#[derive(Default, Clone)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let index = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                if let Some(index) = index {
                    let scheduled = state.tasks.remove(index);
                    state.now = scheduled.due;
                    Some(scheduled.task)
                } else {
                    state.now = target;
                    None
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    fn push(&self, wait: Duration, task: Box<dyn FnOnce()>) -> u64 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + wait;
        state.tasks.push(ScheduledTask { id, due, task });
        id
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, wait: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.push(wait, task);
        let state = Rc::downgrade(&self.state);
        TimerHandle::new(move || {
            if let Some(state) = state.upgrade() {
                let cancelled: Vec<_> = {
                    let mut state = state.borrow_mut();
                    let (cancelled, kept) = std::mem::take(&mut state.tasks)
                        .into_iter()
                        .partition(|t| t.id == id);
                    state.tasks = kept;
                    cancelled
                };
                drop(cancelled);
            }
        })
    }

    fn defer(&self, wait: Duration, task: Box<dyn FnOnce()>) {
        self.push(wait, task);
    }
}

impl Spawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawn_local(task).expect("spawn local task");
    }
}

// -- DOM -- //

#[derive(Default)]
pub struct FakeRegion {
    html: RefCell<String>,
    renders: Cell<usize>,
}

impl FakeRegion {
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl Region for FakeRegion {
    fn render(&self, markup: Markup) {
        *self.html.borrow_mut() = markup.into_string();
        self.renders.set(self.renders.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeField {
    value: RefCell<String>,
    focused: Cell<bool>,
}

impl FakeField {
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }
}

impl TextField for FakeField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
    fn focus(&self) {
        self.focused.set(true);
    }
}

#[derive(Default)]
pub struct FakeButton {
    disabled: Cell<bool>,
    label: RefCell<String>,
    disabled_states: RefCell<Vec<bool>>,
}

impl FakeButton {
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }
    pub fn disabled_states(&self) -> Vec<bool> {
        self.disabled_states.borrow().clone()
    }
}

impl Button for FakeButton {
    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.disabled_states.borrow_mut().push(disabled);
    }
    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }
}

#[derive(Default)]
pub struct FakeDialog {
    alerts: RefCell<Vec<String>>,
}

impl FakeDialog {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialog for FakeDialog {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct FakeStyle {
    styles: RefCell<Vec<(String, String)>>,
}

impl FakeStyle {
    pub fn get(&self, property: &str) -> Option<String> {
        self.styles
            .borrow()
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
    }
}

impl StyleTarget for FakeStyle {
    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .push((property.to_string(), value.to_string()));
    }
}

// -- storage -- //

/// Stores raw JSON strings like the browser does.
#[derive(Default, Clone)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
    pub fn set_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, key: &str) -> std::result::Result<Vec<String>, StorageError> {
        let raw = self
            .raw(key)
            .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))?;
        Ok(serde_json::from_str(&raw)?)
    }
    fn store(&self, key: &str, entries: &[String]) -> std::result::Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.set_raw(key, &raw);
        Ok(())
    }
}

// -- API -- //

pub struct FakeCommentsApi {
    comments: RefCell<Result<Vec<Comment>>>,
    create_result: RefCell<Result<()>>,
    list_requests: RefCell<Vec<String>>,
    created: RefCell<Vec<(String, NewComment)>>,
}

impl Default for FakeCommentsApi {
    fn default() -> Self {
        Self {
            comments: RefCell::new(Ok(Vec::new())),
            create_result: RefCell::new(Ok(())),
            list_requests: RefCell::default(),
            created: RefCell::default(),
        }
    }
}

impl FakeCommentsApi {
    pub fn set_comments(&self, result: Result<Vec<Comment>>) {
        *self.comments.borrow_mut() = result;
    }
    pub fn set_create_result(&self, result: Result<()>) {
        *self.create_result.borrow_mut() = result;
    }
    pub fn list_requests(&self) -> Vec<String> {
        self.list_requests.borrow().clone()
    }
    pub fn created(&self) -> Vec<(String, NewComment)> {
        self.created.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CommentsApi for FakeCommentsApi {
    async fn comments(&self, article_id: &str) -> Result<Vec<Comment>> {
        self.list_requests.borrow_mut().push(article_id.to_string());
        self.comments.borrow().clone()
    }
    async fn create_comment(&self, article_id: &str, comment: &NewComment) -> Result<()> {
        self.created
            .borrow_mut()
            .push((article_id.to_string(), comment.clone()));
        self.create_result.borrow().clone()
    }
}

/// Holds every comment load until the test resolves it;
/// posting succeeds immediately.
#[derive(Default)]
pub struct GatedCommentsApi {
    pending: RefCell<Vec<oneshot::Sender<Result<Vec<Comment>>>>>,
    created: RefCell<Vec<NewComment>>,
}

impl GatedCommentsApi {
    pub fn pending_loads(&self) -> usize {
        self.pending.borrow().len()
    }
    pub fn created(&self) -> Vec<NewComment> {
        self.created.borrow().clone()
    }
    /// Resolves the load at `index` in order of arrival among the pending ones.
    pub fn resolve(&self, index: usize, result: Result<Vec<Comment>>) {
        let sender = self.pending.borrow_mut().remove(index);
        sender.send(result).expect("waiting load");
    }
}

#[async_trait(?Send)]
impl CommentsApi for GatedCommentsApi {
    async fn comments(&self, _article_id: &str) -> Result<Vec<Comment>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push(tx);
        rx.await
            .unwrap_or_else(|_| Err(Error::Fetch("request dropped".into())))
    }
    async fn create_comment(&self, _article_id: &str, comment: &NewComment) -> Result<()> {
        self.created.borrow_mut().push(comment.clone());
        Ok(())
    }
}

/// Answers every search immediately with the same result.
pub struct FakeSearchApi {
    result: RefCell<Result<Vec<Article>>>,
    queries: RefCell<Vec<String>>,
}

impl Default for FakeSearchApi {
    fn default() -> Self {
        Self {
            result: RefCell::new(Ok(Vec::new())),
            queries: RefCell::default(),
        }
    }
}

impl FakeSearchApi {
    pub fn set_result(&self, result: Result<Vec<Article>>) {
        *self.result.borrow_mut() = result;
    }
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SearchApi for FakeSearchApi {
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        self.queries.borrow_mut().push(query.to_string());
        self.result.borrow().clone()
    }
}

/// Holds every search until the test resolves it.
#[derive(Default)]
pub struct GatedSearchApi {
    pending: RefCell<Vec<(String, oneshot::Sender<Result<Vec<Article>>>)>>,
}

impl GatedSearchApi {
    pub fn pending_queries(&self) -> Vec<String> {
        self.pending.borrow().iter().map(|(q, _)| q.clone()).collect()
    }
    pub fn resolve(&self, query: &str, result: Result<Vec<Article>>) {
        let sender = {
            let mut pending = self.pending.borrow_mut();
            let index = pending
                .iter()
                .position(|(q, _)| q == query)
                .expect("pending search");
            pending.remove(index).1
        };
        sender.send(result).expect("waiting search");
    }
}

#[async_trait(?Send)]
impl SearchApi for GatedSearchApi {
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((query.to_string(), tx));
        rx.await
            .unwrap_or_else(|_| Err(Error::Fetch("request dropped".into())))
    }
}

pub fn article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn comment(author: &str, content: &str) -> Comment {
    Comment {
        id: None,
        article_id: None,
        author: author.to_string(),
        content: content.to_string(),
        status: None,
        created_at: None,
    }
}
