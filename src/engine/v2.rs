use log::debug;
use serde_json::Value;

use super::models::{UNKNOWN_DIRECTORY, UNKNOWN_FILE, UnifiedNode};
use super::normalize::{Dialect, name_or, normalize_items};
use super::raw::{RawDirectory, RawFile, children_field};

/// Format v2: a node without a name is displayed by its version.
pub struct V2;

impl Dialect for V2 {
    const LABEL: &'static str = "v2";

    fn file_name(file: &RawFile<'_>) -> String {
        name_or(file.name.or(file.version), UNKNOWN_FILE)
    }

    fn directory_name(dir: &RawDirectory<'_>) -> String {
        name_or(dir.name.or(dir.version), UNKNOWN_DIRECTORY)
    }
}

pub fn normalize_v2(raw: &Value) -> Vec<UnifiedNode> {
    match children_field(raw) {
        Some(children) => {
            debug!("v2: root lists {} children", children.len());
            normalize_items::<V2>(children)
        }
        None => {
            debug!("v2: manifest has no children list");
            Vec::new()
        }
    }
}
