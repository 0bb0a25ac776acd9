use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A post as returned by `GET /posts`.
///
/// Server-assigned fields (id, likes, ...) are kept opaquely in `extra`; the
/// client never generates or validates them. A missing or `null` author or
/// content affects only that row, never the rest of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    pub fn new(author_id: i64, content: impl Into<String>) -> Self {
        Self {
            author_id: Some(author_id),
            content: content.into(),
            extra: Map::new(),
        }
    }

    /// "User #<id>", or "Unknown user" when the server sent no author.
    pub fn author_label(&self) -> String {
        match self.author_id {
            Some(id) => format!("User #{id}"),
            None => "Unknown user".to_string(),
        }
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost<'a> {
    pub author_id: i64,
    pub content: &'a str,
}
