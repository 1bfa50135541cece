//! Article library payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub category_id: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of an article creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub category_id: String,
}

/// Categories and articles fetched together for the library view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
}

impl Library {
    /// Articles in the given category, in server order.
    pub fn in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Article> {
        self.articles
            .iter()
            .filter(move |a| a.category_id == category_id)
    }

    pub fn category_name(&self, category_id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.as_str())
    }
}
