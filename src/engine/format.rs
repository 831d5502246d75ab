use serde::Serialize;
use serde_json::Value;

/// Manifest schema dialect. Serializes as its integer tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ManifestFormat {
    V1,
    V2,
}

impl ManifestFormat {
    /// Integer tag renderers use to pick a display style.
    pub fn tag(self) -> u8 {
        match self {
            ManifestFormat::V1 => 1,
            ManifestFormat::V2 => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ManifestFormat::V1 => "format v1",
            ManifestFormat::V2 => "format v2",
        }
    }
}

impl From<ManifestFormat> for u8 {
    fn from(format: ManifestFormat) -> Self {
        format.tag()
    }
}

/// Classify a decoded manifest. Anything that is not an object tagged
/// `api_version: 2` is treated as v1.
pub fn detect(raw: &Value) -> ManifestFormat {
    let tagged_v2 = raw
        .as_object()
        .and_then(|root| root.get("api_version"))
        .and_then(Value::as_f64)
        .is_some_and(|version| version == 2.0);

    if tagged_v2 {
        ManifestFormat::V2
    } else {
        ManifestFormat::V1
    }
}
