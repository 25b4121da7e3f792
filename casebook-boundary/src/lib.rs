use serde::{Deserialize, Serialize};

/// A published comment as returned by the comment endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    pub author: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// ISO 8601 timestamp, with or without an UTC offset.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommentList {
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedComment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// Search result projection of an article.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub id      : String,
    #[serde(default)]
    pub title   : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source  : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content : Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

/// Body of a failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub error: String,
}
