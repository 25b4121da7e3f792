use std::time::Duration;

use wasm_bindgen::JsValue;
use web_sys::Window;

pub const DEFAULT_API_URL: &str = "/api";

/// Name of the global variable the page uses to inject the article ID.
pub const ARTICLE_ID_GLOBAL: &str = "ARTICLE_ID";

/// Quiet period before a live search is started.
pub const LIVE_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Minimum number of characters that trigger a live search.
pub const LIVE_SEARCH_MIN_CHARS: usize = 2;

pub const FADE_IN_DELAY: Duration = Duration::from_millis(50);
pub const FADE_IN_TRANSITION: &str = "opacity 0.3s ease";

pub const MAX_AUTHOR_CHARS: usize = 100;
pub const MAX_COMMENT_CHARS: usize = 1000;

/// IDs of the DOM elements the widgets attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub comment_form: &'static str,
    pub comments_list: &'static str,
    pub comment_author: &'static str,
    pub comment_content: &'static str,
    pub search_input: &'static str,
    pub search_button: &'static str,
    pub search_results: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            comment_form: "commentForm",
            comments_list: "commentsList",
            comment_author: "commentAuthor",
            comment_content: "commentContent",
            search_input: "searchInput",
            search_button: "searchButton",
            search_results: "searchResults",
        }
    }
}

/// Everything the hosting page provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub api_url: String,
    pub article_id: Option<String>,
    pub elements: ElementIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            article_id: None,
            elements: ElementIds::default(),
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let article_id = js_sys::Reflect::get(window, &JsValue::from_str(ARTICLE_ID_GLOBAL))
            .ok()
            .and_then(|value| {
                value
                    .as_string()
                    .or_else(|| value.as_f64().map(|n| n.to_string()))
            });
        let article_id = normalize_article_id(article_id);
        if article_id.is_none() {
            log::debug!("No article ID available on this page");
        }
        Self {
            article_id,
            ..Self::default()
        }
    }
}

/// Blank IDs count as missing.
#[must_use]
pub fn normalize_article_id(id: Option<String>) -> Option<String> {
    id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())
}
