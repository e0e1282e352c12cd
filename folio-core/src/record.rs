use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub views: u64,
    /// Display-formatted; never parsed for ordering.
    #[serde(default)]
    pub date: String,
}

impl ContentRecord {
    pub fn cover_path(&self) -> String {
        format!("images/cover{}.jpg", self.id)
    }

    pub fn detail_link(&self) -> String {
        format!("blog.html?id={}", self.id)
    }

    /// True when the already-normalized needle occurs in any searchable field.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.content, &self.author, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Shape of the static record source: `{ "blog": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecordDocument {
    #[serde(default)]
    pub blog: Vec<ContentRecord>,
}
