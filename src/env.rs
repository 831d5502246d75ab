use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the content root.
pub const ROOT_VAR: &str = "RELEASE_CATALOG_ROOT";

const DEFAULT_ROOT: &str = "public";

/// Directory holding `software-config.json` and the way manifests.
///
/// An explicit value (from the command line) wins, then `RELEASE_CATALOG_ROOT`,
/// then `./public`.
pub fn content_root(explicit: Option<PathBuf>) -> PathBuf {
    pick_root(explicit, env::var_os(ROOT_VAR))
}

fn pick_root(explicit: Option<PathBuf>, from_env: Option<OsString>) -> PathBuf {
    explicit
        .or_else(|| {
            from_env
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let root = pick_root(
            Some(PathBuf::from("/srv/catalog")),
            Some(OsString::from("/from/env")),
        );
        assert_eq!(root, PathBuf::from("/srv/catalog"));
        assert_eq!(
            content_root(Some(PathBuf::from("/srv/catalog"))),
            PathBuf::from("/srv/catalog")
        );
    }

    #[test]
    fn env_value_used_without_explicit_root() {
        let root = pick_root(None, Some(OsString::from("/from/env")));
        assert_eq!(root, PathBuf::from("/from/env"));
    }

    #[test]
    fn empty_or_missing_env_falls_back_to_public() {
        assert_eq!(pick_root(None, Some(OsString::new())), PathBuf::from("public"));
        assert_eq!(pick_root(None, None), PathBuf::from("public"));
    }
}
