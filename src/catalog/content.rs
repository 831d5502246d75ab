use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::engine::{self, ProcessedManifest, raw::text_field};

/// A plain download link, used by ways that publish a flat list instead of a
/// release tree (drivers, renderers).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub name: String,
    pub url: String,
}

/// What a download way's document turned out to contain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WayContent {
    Tree(ProcessedManifest),
    Links { entries: Vec<LinkEntry> },
    Unrecognized,
}

impl WayContent {
    /// Sort a way document into a link list or a release tree, narrowing the
    /// tree to `path`.
    pub fn classify<S: AsRef<str>>(raw: &Value, path: &[S]) -> Self {
        if let Some(entries) = raw.as_array().filter(|list| looks_like_link(list.first())) {
            debug!("way content: flat list of {} links", entries.len());
            let entries = entries
                .iter()
                .filter_map(|entry| {
                    Some(LinkEntry {
                        name: text_field(entry, "name")?.to_owned(),
                        url: text_field(entry, "url")?.to_owned(),
                    })
                })
                .collect();
            return WayContent::Links { entries };
        }

        if raw.get("children").is_some_and(Value::is_array) {
            return WayContent::Tree(engine::load(raw, path));
        }

        debug!("way content: neither a link list nor a release tree");
        WayContent::Unrecognized
    }
}

fn looks_like_link(entry: Option<&Value>) -> bool {
    entry.is_some_and(|entry| {
        text_field(entry, "name").is_some() && text_field(entry, "url").is_some()
    })
}
