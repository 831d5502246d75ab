//! Plain-text listing of catalog content for the command line.

use std::fmt::Write;

use crate::catalog::{LinkEntry, WayContent};
use crate::engine::{ManifestFormat, ProcessedManifest, UnifiedNode};
use crate::util::display_arch;

/// Nesting levels printed before a directory is cut short.
pub const MAX_DEPTH: usize = 10;

pub fn format_content(title: &str, content: &WayContent) -> String {
    match content {
        WayContent::Tree(manifest) => format_manifest(title, manifest),
        WayContent::Links { entries } => format_links(title, entries),
        WayContent::Unrecognized => format!("{title}\n  (unrecognized download data)\n"),
    }
}

pub fn format_manifest(title: &str, manifest: &ProcessedManifest) -> String {
    let mut output = String::new();
    let _ = writeln!(&mut output, "{title} [{}]", manifest.format.label());

    // Only v2 manifests carry a header worth showing.
    if manifest.format == ManifestFormat::V2 {
        if let Some(name) = &manifest.header.name {
            let _ = writeln!(&mut output, "Name: {name}");
        }
        if let Some(url) = &manifest.header.url {
            let _ = writeln!(&mut output, "Source: {url}");
        }
        if let Some(description) = &manifest.header.description {
            for line in description.lines() {
                let _ = writeln!(&mut output, "  | {line}");
            }
        }
    }

    if manifest.items.is_empty() {
        let _ = writeln!(&mut output, "  (nothing here)");
        return output;
    }
    write_nodes(&mut output, manifest, &manifest.items, 0);
    output
}

pub fn format_links(title: &str, entries: &[LinkEntry]) -> String {
    let mut output = String::new();
    let _ = writeln!(&mut output, "{title}");
    if entries.is_empty() {
        let _ = writeln!(&mut output, "  (nothing here)");
    }
    for entry in entries {
        let _ = writeln!(&mut output, "  {} -> {}", entry.name, entry.url);
    }
    output
}

fn write_nodes(
    output: &mut String,
    manifest: &ProcessedManifest,
    nodes: &[UnifiedNode],
    depth: usize,
) {
    let indent = "  ".repeat(depth + 1);
    if depth >= MAX_DEPTH {
        let _ = writeln!(output, "{indent}(nested deeper than {MAX_DEPTH} levels, not shown)");
        return;
    }

    for node in nodes {
        match node {
            UnifiedNode::File(file) => {
                let mut line = format!("{indent}{}", file.name);
                if let Some(version) = &file.version {
                    let _ = write!(line, " ({version})");
                }
                if let Some(arch) = display_arch(&file.arch) {
                    let _ = write!(line, " [{arch}]");
                }
                let _ = writeln!(output, "{line} -> {}", file.download_link);
            }
            UnifiedNode::Directory(dir) => {
                let mut line = format!("{indent}{}/", dir.name);
                if let Some(version) = &dir.version {
                    let _ = write!(line, " v{version}");
                }
                if depth == 0 && manifest.is_latest(&dir.name) {
                    line.push_str(" (latest)");
                }
                let _ = writeln!(output, "{line}");
                if dir.children.is_empty() {
                    let _ = writeln!(output, "{indent}  (empty)");
                } else {
                    write_nodes(output, manifest, &dir.children, depth + 1);
                }
            }
        }
    }
}
