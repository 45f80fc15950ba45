use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::content::{ContentBlock, parse_blocks};
use crate::models::topic::Topic;

/// A published article. Append-only: once the store hands one back, no
/// field changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Article {
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub topic: Topic,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    pub created_at: jiff::Timestamp,
}

impl Article {
    /// Content split into renderable blocks.
    pub fn blocks(&self) -> Vec<ContentBlock> {
        parse_blocks(&self.content)
    }
}

/// Insert shape for an article. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewArticle {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub topic: Topic,
    pub reading_time: u32,
}
