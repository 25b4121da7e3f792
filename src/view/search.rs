use casebook_boundary::Article;
use maud::{html, Markup, Render};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{notice, Highlight};

pub const HINT_MESSAGE: &str = "Enter a keyword to start searching";
pub const UNKNOWN_SOURCE: &str = "Unknown source";

#[must_use]
pub fn hint() -> Markup {
    notice("search-hint", HINT_MESSAGE)
}

#[must_use]
pub fn loading() -> Markup {
    html! {
        div class="loading" { "Searching..." }
    }
}

#[must_use]
pub fn search_error(reason: &str) -> Markup {
    notice("error-message", &format!("Search failed: {reason}"))
}

#[must_use]
pub fn no_results(query: &str) -> Markup {
    notice("search-hint", &format!("No results for '{query}'"))
}

#[must_use]
pub fn article_href(id: &str) -> String {
    format!("/article/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

fn result_count(count: usize) -> String {
    if count == 1 {
        "Found 1 article".to_string()
    } else {
        format!("Found {count} articles")
    }
}

/// View model of a single search hit.
#[derive(Debug, Clone)]
pub struct ResultItem<'a> {
    pub href: String,
    pub title: Highlight<'a>,
    pub source: &'a str,
    pub date: &'a str,
    pub preview: Highlight<'a>,
}

impl<'a> ResultItem<'a> {
    #[must_use]
    pub fn new(article: &'a Article, query: &'a str) -> Self {
        Self {
            href: article_href(&article.id),
            title: Highlight::new(&article.title, query),
            source: article
                .source
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_SOURCE),
            date: article.date.as_deref().unwrap_or_default(),
            preview: Highlight::new(article.summary.as_deref().unwrap_or_default(), query),
        }
    }
}

impl Render for ResultItem<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="search-result-item" {
                div class="search-result-title" {
                    a href=(self.href) target="_blank" { (self.title) }
                }
                div class="article-source" {
                    span class="source-icon" { "@" }
                    span { (self.source) }
                    span class="article-date" { (self.date) }
                }
                div class="search-result-preview" { (self.preview) }
            }
        }
    }
}

#[must_use]
pub fn search_results(query: &str, articles: &[Article]) -> Markup {
    if articles.is_empty() {
        return no_results(query);
    }
    html! {
        div class="search-results-info" {
            p { (result_count(articles.len())) }
        }
        @for article in articles {
            (ResultItem::new(article, query))
        }
    }
}
