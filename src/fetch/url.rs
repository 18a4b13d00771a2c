//! Web page fetching and text extraction.

use crate::error::{AppError, Result};
use indexmap::IndexMap;
use scraper::{Html, Selector};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Tags whose text is collected, in collection order.
const CONTENT_TAGS: [&str; 7] = ["h1", "h2", "h3", "h4", "h5", "h6", "p"];

/// Metadata and visible text extracted from one HTML page.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub meta_data: MetaData,
    pub page_content: Vec<String>,
}

/// `<meta>` values keyed by name or property, in first-seen key order.
///
/// A key whose latest tag had no `content` keeps its slot but is left out of
/// lookups and serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData(IndexMap<String, Option<String>>);

impl MetaData {
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        self.0.insert(key.to_string(), value.map(str::to_string));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(k, v)| Some((k.as_str(), v.as_deref()?)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for MetaData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// GET `url` and extract its metadata and text.
pub fn fetch_page(client: &reqwest::blocking::Client, url: &str) -> Result<PageContent> {
    let fetch_err = |reason: String| AppError::Fetch { url: url.to_string(), reason };

    let response = client.get(url).send().map_err(|e| fetch_err(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_err(format!("HTTP {status}")));
    }
    let body = response.text().map_err(|e| fetch_err(e.to_string()))?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(extract_page(&body))
}

/// Extract `<meta>` key/content pairs and heading/paragraph text.
///
/// Text is grouped by tag: every `h1` comes before every `h2`, and so on down
/// to `p`. Within one tag, document order is kept.
pub fn extract_page(html: &str) -> PageContent {
    let doc = Html::parse_document(html);

    let mut meta_data = MetaData::default();
    let meta_sel = Selector::parse("meta").expect("valid meta selector");
    for el in doc.select(&meta_sel) {
        let content = el.value().attr("content");
        for key_attr in ["name", "property"] {
            if let Some(key) = el.value().attr(key_attr) {
                meta_data.set(key, content);
            }
        }
    }

    let mut page_content = Vec::new();
    for tag in CONTENT_TAGS {
        let sel = Selector::parse(tag).expect("valid tag selector");
        page_content.extend(doc.select(&sel).map(|el| el.text().collect::<String>()));
    }

    PageContent { meta_data, page_content }
}
