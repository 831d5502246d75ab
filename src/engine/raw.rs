//! Borrowed view over one raw manifest node.
//!
//! Both dialects share the node shape, so a single decode step turns a
//! `serde_json::Value` into a [`RawNode`] and the dialects only differ in how
//! they fill in missing names.

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawNode<'a> {
    File(RawFile<'a>),
    Directory(RawDirectory<'a>),
    /// Non-object value, missing `type`, or a `type` other than file/directory.
    Unsupported,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawFile<'a> {
    pub name: Option<&'a str>,
    pub version: Option<&'a str>,
    pub download_link: Option<&'a str>,
    pub arch: Option<&'a str>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawDirectory<'a> {
    pub name: Option<&'a str>,
    pub version: Option<&'a str>,
    /// `None` when `children` is absent or not a list.
    pub children: Option<&'a [Value]>,
}

impl<'a> RawNode<'a> {
    pub fn decode(value: &'a Value) -> Self {
        match text_field(value, "type") {
            Some("file") => RawNode::File(RawFile {
                name: text_field(value, "name"),
                version: text_field(value, "version"),
                download_link: text_field(value, "download_link"),
                arch: text_field(value, "arch"),
            }),
            Some("directory") => RawNode::Directory(RawDirectory {
                name: text_field(value, "name"),
                version: text_field(value, "version"),
                children: children_field(value),
            }),
            _ => RawNode::Unsupported,
        }
    }
}

/// String field of an object; empty strings and non-string values count as absent.
pub fn text_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

pub fn children_field(value: &Value) -> Option<&[Value]> {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}
