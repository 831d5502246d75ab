/// Split a `/`-separated drill-down path into directory names.
///
/// Empty segments (leading, trailing or doubled slashes) are dropped; nothing
/// else is trimmed or decoded.
#[must_use]
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Architecture label worth showing next to a file, if any.
#[must_use]
pub fn display_arch(arch: &str) -> Option<&str> {
    (!arch.is_empty() && arch != "all").then_some(arch)
}
