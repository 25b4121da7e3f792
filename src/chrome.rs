//! Page-wide cosmetics.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::{
    config::{FADE_IN_DELAY, FADE_IN_TRANSITION},
    dom::on_event,
    error::Result,
    ports::{Scheduler, StyleTarget},
};

const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;

/// The selector of the element an in-page link points to.
///
/// A bare `#` points nowhere.
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|fragment| !fragment.is_empty())
        .map(|_| href)
}

/// Hides the body and fades it in after a short delay.
pub fn fade_in(body: Rc<dyn StyleTarget>, scheduler: &dyn Scheduler) {
    body.set_style("opacity", "0");
    scheduler.defer(
        FADE_IN_DELAY,
        Box::new(move || {
            body.set_style("transition", FADE_IN_TRANSITION);
            body.set_style("opacity", "1");
        }),
    );
}

/// Replaces the jump to in-page anchors with smooth scrolling.
pub fn install_smooth_scroll(document: &Document) -> Result<()> {
    let anchors = document.query_selector_all(IN_PAGE_ANCHORS)?;
    for index in 0..anchors.length() {
        let Some(anchor) = anchors
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let document = document.clone();
        let target = anchor.clone();
        on_event(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = target.get_attribute("href").unwrap_or_default();
            if let Some(element) = scroll_target(&document, &href) {
                element.scroll_into_view_with_scroll_into_view_options(&smooth_to_start());
            }
        })?;
    }
    log::debug!("Smooth scrolling for {} anchors", anchors.length());
    Ok(())
}

fn scroll_target(document: &Document, href: &str) -> Option<Element> {
    let selector = anchor_selector(href)?;
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(err) => {
            log::debug!("Invalid anchor '{href}': {err:?}");
            None
        }
    }
}

fn smooth_to_start() -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options
}
