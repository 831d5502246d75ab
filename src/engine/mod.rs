//! Manifest normalization and path resolution.
//!
//! Raw manifest JSON comes in one of two dialects. [`detect`] picks the
//! dialect, the matching normalizer turns it into a list of
//! [`UnifiedNode`]s, and [`resolve_path`] optionally narrows that list to the
//! children of a nested directory. Nothing here fails: unrecognized input
//! shows up as an empty list.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use self::raw::text_field;

pub mod format;
pub mod models;
pub mod normalize;
pub mod path;
pub mod raw;
pub mod v1;
pub mod v2;

pub use format::{ManifestFormat, detect};
pub use models::{ManifestHeader, UnifiedDirectory, UnifiedFile, UnifiedNode};
pub use path::{into_subtree, resolve_path};
pub use v1::normalize_v1;
pub use v2::normalize_v2;

/// Normalize any manifest and narrow it to `path` when one is given.
pub fn process<S: AsRef<str>>(raw: &Value, path: &[S]) -> Vec<UnifiedNode> {
    let format = detect(raw);
    debug!("process: treating manifest as {}", format.label());
    let items = match format {
        ManifestFormat::V1 => normalize_v1(raw),
        ManifestFormat::V2 => normalize_v2(raw),
    };

    if path.is_empty() {
        items
    } else {
        into_subtree(items, path)
    }
}

/// A normalized manifest together with what a renderer shows around it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessedManifest {
    pub format: ManifestFormat,
    pub header: ManifestHeader,
    pub items: Vec<UnifiedNode>,
    /// Set when `items` are the children of a nested directory rather than
    /// the manifest's top level.
    pub narrowed: bool,
}

impl ProcessedManifest {
    /// Whether `name` is the top-level directory flagged by the manifest's
    /// `latest` marker. Always false once the items were narrowed by a path.
    pub fn is_latest(&self, name: &str) -> bool {
        !self.narrowed && self.header.latest.as_deref() == Some(name)
    }
}

/// Like [`process`], but also keeps the format and the root header fields.
pub fn load<S: AsRef<str>>(raw: &Value, path: &[S]) -> ProcessedManifest {
    ProcessedManifest {
        format: detect(raw),
        header: read_header(raw),
        items: process(raw, path),
        narrowed: !path.is_empty(),
    }
}

fn read_header(raw: &Value) -> ManifestHeader {
    let text = |key: &str| text_field(raw, key).map(str::to_owned);
    ManifestHeader {
        name: text("name"),
        url: text("url"),
        description: text("description"),
        latest: text("latest"),
    }
}
