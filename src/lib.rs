use std::rc::Rc;

use gloo_storage::LocalStorage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
    Window,
};

use casebook_frontend_api::PublicApi;

pub mod api;
pub mod chrome;
pub mod config;
pub mod dom;
pub mod error;
pub mod history;
pub mod ports;
pub mod util;
pub mod validate;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod testing;

use self::{
    config::PageConfig,
    dom::{element_by_id, on_event, BrowserDialog, BrowserScheduler, BrowserSpawner},
    error::{Error, Result},
    history::SearchHistory,
    widgets::{CommentElements, CommentWidget, SearchElements, SearchWidget},
};

const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;

/// Attaches all widgets to the current page.
///
/// Each widget attaches on its own: a page without
/// a search box still gets its comments.
pub fn run() -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;
    let config = PageConfig::from_window(&window);
    let api = Rc::new(PublicApi::new(config.api_url.clone()));

    report("page chrome", attach_chrome(&document));
    report(
        "comment widget",
        attach_comments(&window, &document, &config, Rc::clone(&api)),
    );
    report("search widget", attach_search(&document, &config, api));
    Ok(())
}

fn report(part: &str, result: Result<()>) {
    match result {
        Ok(()) => log::debug!("Attached {part}"),
        Err(Error::MissingElement(id)) => {
            log::info!("No {part} on this page: element '{id}' is missing");
        }
        Err(err) => log::warn!("Unable to attach {part}: {err}"),
    }
}

fn attach_chrome(document: &Document) -> Result<()> {
    if let Some(body) = document.body() {
        chrome::fade_in(Rc::new(body), &BrowserScheduler);
    }
    chrome::install_smooth_scroll(document)
}

fn attach_comments(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    api: Rc<PublicApi>,
) -> Result<()> {
    let ids = &config.elements;
    let form: Element = element_by_id(document, ids.comment_form, "form")?;
    let submit = form
        .query_selector(SUBMIT_BUTTON)?
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| Error::MissingElement(format!("{} {SUBMIT_BUTTON}", ids.comment_form)))?;
    let elements = CommentElements {
        list: Rc::new(element_by_id::<Element>(document, ids.comments_list, "element")?),
        author: Rc::new(element_by_id::<HtmlInputElement>(
            document,
            ids.comment_author,
            "input",
        )?),
        content: Rc::new(element_by_id::<HtmlTextAreaElement>(
            document,
            ids.comment_content,
            "textarea",
        )?),
        submit: Rc::new(submit),
    };
    let dialog = Rc::new(BrowserDialog(window.clone()));
    let widget = Rc::new(CommentWidget::new(
        api,
        config.article_id.clone(),
        elements,
        dialog,
    ));

    let on_submit = Rc::clone(&widget);
    on_event(&form, "submit", move |event| {
        event.prevent_default();
        let widget = Rc::clone(&on_submit);
        spawn_local(async move { widget.submit().await });
    })?;

    spawn_local(async move { widget.load_comments().await });
    Ok(())
}

fn attach_search(document: &Document, config: &PageConfig, api: Rc<PublicApi>) -> Result<()> {
    let ids = &config.elements;
    let input: HtmlInputElement = element_by_id(document, ids.search_input, "input")?;
    let button: Element = element_by_id(document, ids.search_button, "element")?;
    let results: Element = element_by_id(document, ids.search_results, "element")?;
    let widget = Rc::new(SearchWidget::new(
        api,
        SearchElements {
            input: Rc::new(input.clone()),
            results: Rc::new(results),
        },
        SearchHistory::new(LocalStorage),
        Rc::new(BrowserScheduler),
        Rc::new(BrowserSpawner),
    ));
    widget.focus();

    let on_click = Rc::clone(&widget);
    on_event(&button, "click", move |_| on_click.on_search_button())?;

    let on_key = Rc::clone(&widget);
    on_event(&input, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            on_key.on_key(&event.key());
        }
    })?;

    on_event(&input, "input", move |_| widget.on_input())?;
    Ok(())
}
