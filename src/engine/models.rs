use serde::{Deserialize, Serialize};

/// Name given to a file node whose manifest entry carries no usable name.
pub const UNKNOWN_FILE: &str = "unknown file";
/// Name given to a directory node whose manifest entry carries no usable name.
pub const UNKNOWN_DIRECTORY: &str = "unknown directory";

/// One node of the unified release tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UnifiedNode {
    File(UnifiedFile),
    Directory(UnifiedDirectory),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    #[serde(default)]
    pub download_link: String,
    #[serde(default)]
    pub arch: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedDirectory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    #[serde(default)]
    pub children: Vec<UnifiedNode>,
}

impl UnifiedNode {
    pub fn name(&self) -> &str {
        match self {
            UnifiedNode::File(file) => &file.name,
            UnifiedNode::Directory(dir) => &dir.name,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            UnifiedNode::File(file) => file.version.as_deref(),
            UnifiedNode::Directory(dir) => dir.version.as_deref(),
        }
    }

    pub fn as_file(&self) -> Option<&UnifiedFile> {
        match self {
            UnifiedNode::File(file) => Some(file),
            UnifiedNode::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&UnifiedDirectory> {
        match self {
            UnifiedNode::Directory(dir) => Some(dir),
            UnifiedNode::File(_) => None,
        }
    }
}

/// Pass-through fields found at the root of a manifest.
///
/// `description` is markdown text; nothing in this crate interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ManifestHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_type_tag_and_skips_missing_version() {
        let node = UnifiedNode::Directory(UnifiedDirectory {
            version: None,
            name: "v1.0.0".into(),
            children: vec![UnifiedNode::File(UnifiedFile {
                version: Some("1.0.0".into()),
                name: "app.apk".into(),
                download_link: "/d/app.apk".into(),
                arch: String::new(),
            })],
        });

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "directory",
                "name": "v1.0.0",
                "children": [{
                    "type": "file",
                    "version": "1.0.0",
                    "name": "app.apk",
                    "download_link": "/d/app.apk",
                    "arch": ""
                }]
            })
        );
    }

    #[test]
    fn accessors_cover_both_kinds() {
        let file = UnifiedNode::File(UnifiedFile {
            version: Some("2.0.0".into()),
            name: "f".into(),
            download_link: String::new(),
            arch: String::new(),
        });
        assert_eq!(file.name(), "f");
        assert_eq!(file.version(), Some("2.0.0"));
        assert!(file.as_file().is_some());
        assert!(file.as_directory().is_none());
    }

    #[test]
    fn reads_back_serialized_tree_and_fills_defaults() {
        let tree = vec![UnifiedNode::Directory(UnifiedDirectory {
            version: Some("2.0.0".into()),
            name: "v2.0.0".into(),
            children: vec![UnifiedNode::File(UnifiedFile {
                version: None,
                name: "2.0.0".into(),
                download_link: "/d/b.apk".into(),
                arch: "armeabi-v7a".into(),
            })],
        })];

        let text = serde_json::to_string(&tree).unwrap();
        let parsed: Vec<UnifiedNode> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, tree);

        let sparse: UnifiedNode =
            serde_json::from_value(json!({ "type": "directory", "name": "empty" })).unwrap();
        assert_eq!(sparse.as_directory().unwrap().children, Vec::new());
        let bare: UnifiedNode =
            serde_json::from_value(json!({ "type": "file", "name": "bare" })).unwrap();
        assert_eq!(bare.as_file().unwrap().download_link, "");
        assert_eq!(bare.as_file().unwrap().arch, "");
    }
}
