//! Release catalog: turns v1/v2 download manifests into one unified release
//! tree and narrows it to nested directories on request.

pub mod catalog;
pub mod engine;
pub mod env;
pub mod render;
pub mod storage;
pub mod util;

pub use engine::{
    ManifestFormat, ProcessedManifest, UnifiedDirectory, UnifiedFile, UnifiedNode, detect, load,
    process, resolve_path,
};
