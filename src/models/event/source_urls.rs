//! Ingestion adapter for `source_urls`.
//!
//! The data source stores either a single URL string or a list of URL
//! strings, under `source_urls` or the older `source_url` key. Everything past
//! deserialization sees a plain `Vec<String>`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<Option<String>>),
}

/// Deserialize a string, a list of strings, or null into a list.
/// Blank entries are dropped.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    let urls = match value {
        None => Vec::new(),
        Some(OneOrMany::One(url)) => vec![url],
        Some(OneOrMany::Many(urls)) => urls.into_iter().flatten().collect(),
    };

    Ok(urls
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect())
}
