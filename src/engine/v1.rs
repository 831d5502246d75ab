use log::debug;
use serde_json::Value;

use super::models::{UNKNOWN_DIRECTORY, UNKNOWN_FILE, UnifiedFile, UnifiedNode};
use super::normalize::{Dialect, name_or, normalize_items};
use super::raw::{RawDirectory, RawFile, RawNode, children_field, text_field};

/// Format v1: missing names fall back to a fixed literal.
pub struct V1;

impl Dialect for V1 {
    const LABEL: &'static str = "v1";

    fn file_name(file: &RawFile<'_>) -> String {
        name_or(file.name, UNKNOWN_FILE)
    }

    fn directory_name(dir: &RawDirectory<'_>) -> String {
        name_or(dir.name, UNKNOWN_DIRECTORY)
    }
}

/// Normalize a v1 manifest.
///
/// Accepts the conventional `{ latest, children }` root as well as the legacy
/// shapes where the root is itself a directory or a file node. Unrecognized
/// roots produce an empty list.
pub fn normalize_v1(raw: &Value) -> Vec<UnifiedNode> {
    let root = RawNode::decode(raw);

    if let RawNode::Directory(RawDirectory {
        children: Some(children),
        ..
    }) = root
    {
        debug!("v1: root is a directory node with {} children", children.len());
        return normalize_items::<V1>(children);
    }

    if let Some(children) = children_field(raw) {
        debug!("v1: root lists {} children", children.len());
        return normalize_items::<V1>(children);
    }

    if let RawNode::File(file) = root {
        debug!("v1: root is a single file node");
        let version = text_field(raw, "latest").or(file.version);
        return vec![UnifiedNode::File(UnifiedFile {
            version: version.map(str::to_owned),
            name: V1::file_name(&file),
            download_link: file.download_link.unwrap_or_default().to_owned(),
            arch: file.arch.unwrap_or_default().to_owned(),
        })];
    }

    debug!("v1: unrecognized root shape, nothing to show");
    Vec::new()
}
