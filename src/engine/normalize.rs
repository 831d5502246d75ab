use log::trace;
use serde_json::Value;

use super::models::{UnifiedDirectory, UnifiedFile, UnifiedNode};
use super::raw::{RawDirectory, RawFile, RawNode};

/// Per-dialect naming policy for nodes whose `name` is missing.
pub trait Dialect {
    const LABEL: &'static str;

    fn file_name(file: &RawFile<'_>) -> String;

    fn directory_name(dir: &RawDirectory<'_>) -> String;
}

/// Convert a raw child list into unified nodes, preserving order and
/// dropping entries that are neither files nor directories.
pub fn normalize_items<D: Dialect>(items: &[Value]) -> Vec<UnifiedNode> {
    let mut nodes = Vec::with_capacity(items.len());
    for item in items {
        match RawNode::decode(item) {
            RawNode::File(file) => nodes.push(UnifiedNode::File(UnifiedFile {
                version: file.version.map(str::to_owned),
                name: D::file_name(&file),
                download_link: file.download_link.unwrap_or_default().to_owned(),
                arch: file.arch.unwrap_or_default().to_owned(),
            })),
            RawNode::Directory(dir) => nodes.push(UnifiedNode::Directory(UnifiedDirectory {
                version: dir.version.map(str::to_owned),
                name: D::directory_name(&dir),
                children: normalize_items::<D>(dir.children.unwrap_or_default()),
            })),
            RawNode::Unsupported => {}
        }
    }

    let dropped = items.len() - nodes.len();
    if dropped > 0 {
        trace!("{}: dropped {dropped} unsupported entries", D::LABEL);
    }
    nodes
}

pub(crate) fn name_or(name: Option<&str>, fallback: &str) -> String {
    name.unwrap_or(fallback).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Plain;

    impl Dialect for Plain {
        const LABEL: &'static str = "plain";

        fn file_name(file: &RawFile<'_>) -> String {
            name_or(file.name, "?")
        }

        fn directory_name(dir: &RawDirectory<'_>) -> String {
            name_or(dir.name, "?/")
        }
    }

    #[test]
    fn keeps_input_order() {
        let items = json!([
            { "type": "file", "name": "b" },
            { "type": "directory", "name": "a" },
            { "type": "file", "name": "c" }
        ]);
        let nodes = normalize_items::<Plain>(items.as_array().unwrap());
        let names: Vec<&str> = nodes.iter().map(UnifiedNode::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn dialect_decides_missing_names() {
        let items = json!([{ "type": "file" }, { "type": "directory", "children": [] }]);
        let nodes = normalize_items::<Plain>(items.as_array().unwrap());
        assert_eq!(nodes[0].name(), "?");
        assert_eq!(nodes[1].name(), "?/");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(normalize_items::<Plain>(&[]).is_empty());
    }
}
