//! Version log loading

use std::path::Path;

use curate_core::{InputError, Result};
use tracing::{debug, info, instrument};

use crate::types::VersionBlock;

/// Load the version log from a JSON file
#[instrument(fields(path = %path.display()))]
pub fn load_versions(path: &Path) -> Result<Vec<VersionBlock>> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(InputError::Io)?;
    let versions = parse_versions(&content).map_err(|e| InputError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(
        versions = versions.len(),
        commits = versions.iter().map(|v| v.commits.len()).sum::<usize>(),
        "version log loaded"
    );
    Ok(versions)
}

/// Parse a version log from JSON text
pub fn parse_versions(content: &str) -> serde_json::Result<Vec<VersionBlock>> {
    let versions: Vec<VersionBlock> = serde_json::from_str(content)?;
    debug!(versions = versions.len(), "parsed version log");
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curate_core::CurateError;
    use tempfile::TempDir;

    const LOG: &str = r#"[
        {
            "version": "v1.2.0",
            "commits": [
                {"message": "feat: add voice chat session", "author": {"name": "alice"}, "group": "Features"},
                {"message": "chore: bump eslint to 9.0.0", "author": {"name": "ci-bot"}, "sha": "abc123"}
            ]
        },
        {"version": "unreleased", "commits": []}
    ]"#;

    #[test]
    fn test_parse_versions() {
        let versions = parse_versions(LOG).unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].version, "v1.2.0");
        assert_eq!(versions[0].commits[0].author.name, "alice");
        assert_eq!(versions[0].commits[0].group.as_deref(), Some("Features"));
        assert_eq!(versions[0].commits[1].group, None);
        assert!(versions[1].commits.is_empty());
    }

    #[test]
    fn test_parse_null_version_as_unreleased() {
        let versions = parse_versions(
            r#"[
                {"version": null, "commits": [
                    {"message": "feat: add flashcards", "author": {"name": "alice"}, "group": null}
                ]},
                {"version": "v1.0.0", "commits": []}
            ]"#,
        )
        .unwrap();
        assert_eq!(versions[0].version, crate::types::UNRELEASED);
        assert_eq!(versions[0].commits[0].group, None);
        assert_eq!(versions[1].version, "v1.0.0");
    }

    #[test]
    fn test_load_versions_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.json");
        std::fs::write(&path, LOG).unwrap();

        let versions = load_versions(&path).unwrap();
        assert_eq!(versions.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_versions(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CurateError::Input(InputError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.json");
        std::fs::write(&path, "[{\"version\": ").unwrap();

        let err = load_versions(&path).unwrap_err();
        assert!(matches!(err, CurateError::Input(InputError::Malformed { .. })));
    }

    #[test]
    fn test_load_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.json");
        std::fs::write(&path, r#"{"version": "v1.0.0"}"#).unwrap();

        let err = load_versions(&path).unwrap_err();
        assert!(matches!(err, CurateError::Input(InputError::Malformed { .. })));
    }
}
