use maud::{html, Markup, Render};
use regex::RegexBuilder;

pub mod comments;
pub mod search;

const HIGHLIGHT_OPEN: &str = r#"<span class="search-highlight">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

/// Escapes `&`, `<`, `>`, `"` and `'`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    text.render_to(&mut escaped);
    escaped.replace('\'', "&#39;")
}

/// A piece of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

/// Text in which every case-insensitive occurrence of the query is marked.
///
/// Matching happens on the raw text, escaping per segment while
/// rendering. The query is a literal, never a pattern.
#[derive(Debug, Clone, Copy)]
pub struct Highlight<'a> {
    text: &'a str,
    query: &'a str,
}

impl<'a> Highlight<'a> {
    #[must_use]
    pub const fn new(text: &'a str, query: &'a str) -> Self {
        Self { text, query }
    }

    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let Self { text, query } = *self;
        if text.is_empty() {
            return Vec::new();
        }
        let plain = |text| Segment {
            text,
            is_match: false,
        };
        if query.is_empty() {
            return vec![plain(text)];
        }
        let regex = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => regex,
            Err(err) => {
                log::warn!("Unable to highlight '{query}': {err}");
                return vec![plain(text)];
            }
        };
        let mut segments = Vec::new();
        let mut last = 0;
        for m in regex.find_iter(text) {
            if m.start() > last {
                segments.push(plain(&text[last..m.start()]));
            }
            segments.push(Segment {
                text: m.as_str(),
                is_match: true,
            });
            last = m.end();
        }
        if last < text.len() {
            segments.push(plain(&text[last..]));
        }
        segments
    }
}

impl Render for Highlight<'_> {
    fn render_to(&self, buffer: &mut String) {
        for segment in self.segments() {
            if segment.is_match {
                buffer.push_str(HIGHLIGHT_OPEN);
                buffer.push_str(&escape_html(segment.text));
                buffer.push_str(HIGHLIGHT_CLOSE);
            } else {
                buffer.push_str(&escape_html(segment.text));
            }
        }
    }
}

#[must_use]
pub fn highlight_text(text: &str, query: &str) -> Markup {
    Highlight::new(text, query).render()
}

fn notice(class: &str, message: &str) -> Markup {
    html! {
        div class=(class) {
            p { (message) }
        }
    }
}
