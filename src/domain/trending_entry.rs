use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default, rename = "firstName")]
    pub first_name: String,
    #[serde(default, rename = "lastName")]
    pub last_name: String,
}

/// One item of the trending feed, as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingEntry {
    #[serde(default)]
    pub blog_id: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default, rename = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub title: String,
}
