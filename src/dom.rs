//! Browser implementations of the ports.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use maud::Markup;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

use crate::{
    error::{Error, Result},
    ports::{Button, Dialog, Region, Scheduler, Spawner, StyleTarget, TextField, TimerHandle},
};

impl Region for Element {
    fn render(&self, markup: Markup) {
        self.set_inner_html(&markup.into_string());
    }
}

fn focus(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        log::debug!("Unable to focus element: {err:?}");
    }
}

impl TextField for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }
    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value);
    }
    fn focus(&self) {
        focus(self);
    }
}

impl TextField for HtmlTextAreaElement {
    fn value(&self) -> String {
        HtmlTextAreaElement::value(self)
    }
    fn set_value(&self, value: &str) {
        HtmlTextAreaElement::set_value(self, value);
    }
    fn focus(&self) {
        focus(self);
    }
}

impl Button for HtmlButtonElement {
    fn set_disabled(&self, disabled: bool) {
        HtmlButtonElement::set_disabled(self, disabled);
    }
    fn set_label(&self, label: &str) {
        self.set_text_content(Some(label));
    }
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.style().set_property(property, value) {
            log::warn!("Unable to set style '{property}': {err:?}");
        }
    }
}

pub struct BrowserDialog(pub Window);

impl Dialog for BrowserDialog {
    fn alert(&self, message: &str) {
        if let Err(err) = self.0.alert_with_message(message) {
            log::warn!("Unable to show alert: {err:?}");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

fn millis(wait: Duration) -> u32 {
    u32::try_from(wait.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, wait: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(millis(wait), task);
        TimerHandle::new(move || drop(timeout))
    }

    fn defer(&self, wait: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(millis(wait), task).forget();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Looks up an element by its ID and checks its type.
pub fn element_by_id<T>(document: &Document, id: &str, expected: &'static str) -> Result<T>
where
    T: JsCast,
{
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| Error::ElementType {
            id: id.to_string(),
            expected,
        })
}

/// Registers `handler` for the lifetime of the page.
pub fn on_event<H>(target: &EventTarget, event: &str, handler: H) -> Result<()>
where
    H: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
