use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio::fs;

use crate::catalog::{CATALOG_FILE, Catalog, DownloadWay, WayContent};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is hosted remotely; fetching remote manifests is not supported")]
    Remote(String),
}

/// Reads the catalog and manifest documents below a content root.
#[derive(Clone, Debug)]
pub struct ManifestStore {
    root: PathBuf,
}

impl ManifestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a catalog path such as `/fcl/official.json` onto the content root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    pub async fn load_catalog(&self) -> Result<Catalog, StoreError> {
        info!("storage: loading catalog from {}", self.root.display());
        read_document(&self.root.join(CATALOG_FILE)).await
    }

    /// Read and decode one JSON document given by a catalog-style path.
    pub async fn load_json(&self, path: &str) -> Result<Value, StoreError> {
        if path.starts_with("http") {
            return Err(StoreError::Remote(path.to_owned()));
        }
        read_document(&self.resolve(path)).await
    }

    /// Load a way's document and classify it, narrowing trees to `path`.
    pub async fn load_way<S: AsRef<str>>(
        &self,
        way: &DownloadWay,
        path: &[S],
    ) -> Result<WayContent, StoreError> {
        if way.is_external() {
            return Err(StoreError::Remote(way.path.clone()));
        }
        let raw = self.load_json(&way.path).await?;
        Ok(WayContent::classify(&raw, path))
    }
}

/// Read a standalone manifest file outside any content root.
pub async fn read_manifest_file(path: &Path) -> Result<Value, StoreError> {
    read_document(path).await
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    debug!("storage: reading {}", path.display());
    let bytes = fs::read(path).await.map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const NO_PATH: [&str; 0] = [];

    fn write(dir: &TempDir, rel: &str, value: &Value) {
        let path = dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
    }

    fn way(path: &str) -> DownloadWay {
        DownloadWay {
            id: "official".into(),
            name: "Official".into(),
            path: path.into(),
            provider: None,
        }
    }

    #[tokio::test]
    async fn loads_catalog_from_root() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            CATALOG_FILE,
            &json!({
                "metadata": { "enabledSoftware": ["fcl"], "displayOrder": ["fcl"] },
                "children": [{ "id": "fcl", "name": "FCL", "children": [] }]
            }),
        );

        let catalog = ManifestStore::new(dir.path()).load_catalog().await.unwrap();
        assert_eq!(catalog.visible_apps().len(), 1);
    }

    #[tokio::test]
    async fn loads_way_relative_to_root() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "fcl/official.json",
            &json!({
                "api_version": 2,
                "children": [{ "type": "directory", "name": "2.0", "children": [
                    { "type": "file", "version": "2.0", "download_link": "/d/x.apk" }
                ]}]
            }),
        );

        let store = ManifestStore::new(dir.path());
        let content = store.load_way(&way("/fcl/official.json"), &["2.0"]).await.unwrap();
        let WayContent::Tree(manifest) = content else {
            panic!("expected release tree");
        };
        assert_eq!(manifest.items[0].name(), "2.0");
    }

    #[tokio::test]
    async fn remote_ways_are_refused() {
        let store = ManifestStore::new("/nonexistent");
        let err = store
            .load_way(&way("https://example.com/tree.json"), &NO_PATH)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Remote(_)));
    }

    #[tokio::test]
    async fn reports_missing_and_invalid_documents() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.json"), b"{ not json").unwrap();
        let store = ManifestStore::new(dir.path());

        let missing = store.load_json("missing.json").await.unwrap_err();
        assert!(matches!(missing, StoreError::Read { .. }));

        let broken = store.load_json("broken.json").await.unwrap_err();
        assert!(matches!(broken, StoreError::Decode { .. }));
        assert!(broken.to_string().contains("broken.json"));
    }

    #[tokio::test]
    async fn reads_standalone_manifest_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tree.json", &json!({ "children": [] }));
        let raw = read_manifest_file(&dir.path().join("tree.json")).await.unwrap();
        assert_eq!(raw, json!({ "children": [] }));
    }

    #[tokio::test]
    async fn bundled_sample_content_is_readable() {
        let store = ManifestStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("public"));
        let catalog = store.load_catalog().await.unwrap();
        assert_eq!(catalog.visible_apps().len(), 3);

        for app in catalog.visible_apps() {
            for way in app.children.iter().filter(|way| !way.is_external()) {
                let content = store.load_way(way, &NO_PATH).await.unwrap();
                assert_ne!(content, WayContent::Unrecognized, "{}/{}", app.id, way.id);
            }
        }
    }
}
