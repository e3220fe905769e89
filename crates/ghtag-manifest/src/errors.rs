use thiserror::Error;

/// Errors that can occur while rewriting a manifest
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("failed to parse manifest as JSON: {0}")]
    InvalidManifestJson(#[from] serde_json::Error),

    #[error("no github: dependencies to update")]
    NoDependenciesToUpdate,

    #[error("failed to serialize manifest: {0}")]
    SerializeManifest(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dependencies_display() {
        let err = RewriteError::NoDependenciesToUpdate;
        assert_eq!(err.to_string(), "no github: dependencies to update");
    }

    #[test]
    fn test_invalid_json_wraps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RewriteError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse manifest"));
    }

    #[test]
    fn test_serialize_failure_is_not_labeled_a_parse_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RewriteError::SerializeManifest(json_err);
        assert!(err.to_string().starts_with("failed to serialize manifest"));
        assert!(!err.to_string().contains("parse"));
    }
}
