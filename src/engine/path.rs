use log::debug;

use super::models::UnifiedNode;

/// Walk `items` down through the named directories.
///
/// At each level the first directory whose name matches the segment exactly is
/// entered. The first miss ends the walk with an empty slice; later segments
/// are never looked at. An empty path returns `items` itself.
pub fn resolve_path<'a, S: AsRef<str>>(
    items: &'a [UnifiedNode],
    path: &[S],
) -> &'a [UnifiedNode] {
    let mut current = items;
    for segment in path {
        let segment = segment.as_ref();
        let Some(dir) = current.iter().find_map(|item| match item {
            UnifiedNode::Directory(dir) if dir.name == segment => Some(dir),
            _ => None,
        }) else {
            debug!("path: no directory named {segment:?}, nothing to show");
            return &[];
        };
        current = &dir.children;
    }
    current
}

/// Same walk as [`resolve_path`], consuming the tree so the selected children
/// are moved out rather than cloned.
pub fn into_subtree<S: AsRef<str>>(items: Vec<UnifiedNode>, path: &[S]) -> Vec<UnifiedNode> {
    let mut current = items;
    for segment in path {
        let segment = segment.as_ref();
        let Some(index) = current
            .iter()
            .position(|item| matches!(item, UnifiedNode::Directory(dir) if dir.name == segment))
        else {
            debug!("path: no directory named {segment:?}, nothing to show");
            return Vec::new();
        };
        current = match current.swap_remove(index) {
            UnifiedNode::Directory(dir) => dir.children,
            UnifiedNode::File(_) => return Vec::new(),
        };
    }
    current
}
