use serde::{Deserialize, Serialize};

pub mod content;

pub use content::{LinkEntry, WayContent};

/// File name of the catalog document inside the content root.
pub const CATALOG_FILE: &str = "software-config.json";

/// Top-level catalog: which apps exist, which are shown, and in what order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub metadata: CatalogMetadata,
    #[serde(default)]
    pub children: Vec<CatalogApp>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    #[serde(default)]
    pub enabled_software: Vec<String>,
    #[serde(default)]
    pub display_order: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogApp {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<DownloadWay>,
}

/// One download channel of an app, pointing at a manifest document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadWay {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl DownloadWay {
    /// Remote ways live on another host and are not read from the content root.
    pub fn is_external(&self) -> bool {
        self.path.starts_with("http")
    }
}

impl Catalog {
    /// Apps in display order, limited to the enabled ones. Ids that do not
    /// match any app are skipped.
    pub fn visible_apps(&self) -> Vec<&CatalogApp> {
        self.metadata
            .display_order
            .iter()
            .filter(|id| self.metadata.enabled_software.contains(*id))
            .filter_map(|id| self.app(id))
            .collect()
    }

    /// The app selected when nothing was chosen yet.
    pub fn default_app(&self) -> Option<&CatalogApp> {
        self.metadata
            .enabled_software
            .first()
            .and_then(|id| self.app(id))
    }

    pub fn app(&self, id: &str) -> Option<&CatalogApp> {
        self.children.iter().find(|app| app.id == id)
    }

    pub fn way(&self, app_id: &str, way_id: &str) -> Option<&DownloadWay> {
        self.app(app_id)?.way(way_id)
    }

    pub fn app_display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.app(id).map_or(id, |app| app.name.as_str())
    }

    pub fn way_display_name<'a>(&'a self, app_id: &str, way_id: &'a str) -> &'a str {
        self.way(app_id, way_id).map_or(way_id, |way| way.name.as_str())
    }
}

impl CatalogApp {
    pub fn way(&self, id: &str) -> Option<&DownloadWay> {
        self.children.iter().find(|way| way.id == id)
    }
}
