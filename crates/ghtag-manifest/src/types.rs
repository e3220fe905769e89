//! Manifest shapes shared by the rewrite pass

use serde::Deserialize;

/// File looked up directly inside each candidate directory; no recursive
/// search is performed.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The manifest fields scanned for `github:` specifiers, in the fixed order
/// they are processed.
pub const DEPENDENCY_FIELDS: [&str; 4] = [
    "dependencies",
    "devDependencies",
    "optionalDependencies",
    "peerDependencies",
];

/// Where a rewritable specifier lives inside the manifest: the dependency
/// field and the dependency name under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    pub field: &'static str,
    pub name: String,
}

impl TargetLocation {
    /// Dotted `field.name` path, used for reporting which entries changed.
    pub fn dotted(&self) -> String {
        format!("{}.{}", self.field, self.name)
    }
}

/// The slice of a sibling project's `package.json` the scan cares about.
/// Everything else in the file is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateManifest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub url: Option<String>,
}

impl CandidateManifest {
    pub fn repository_url(&self) -> Option<&str> {
        self.repository.as_ref()?.url.as_deref()
    }

    /// A version usable as a tag: present and non-empty.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_reads_nested_repository_url() {
        let candidate: CandidateManifest = serde_json::from_str(
            r#"{"name": "widget", "version": "2.3.1",
                "repository": {"type": "git", "url": "git+https://github.com/acme/widget.git"}}"#,
        )
        .unwrap();
        assert_eq!(
            candidate.repository_url(),
            Some("git+https://github.com/acme/widget.git")
        );
        assert_eq!(candidate.version(), Some("2.3.1"));
    }

    #[test]
    fn test_candidate_tolerates_missing_fields() {
        let candidate: CandidateManifest = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();
        assert_eq!(candidate.repository_url(), None);
        assert_eq!(candidate.version(), None);
    }

    #[test]
    fn test_empty_version_is_not_a_tag() {
        let candidate: CandidateManifest =
            serde_json::from_str(r#"{"version": ""}"#).unwrap();
        assert_eq!(candidate.version(), None);
    }

    #[test]
    fn test_dotted_location() {
        let loc = TargetLocation {
            field: "devDependencies",
            name: "some-pkg".to_string(),
        };
        assert_eq!(loc.dotted(), "devDependencies.some-pkg");
    }
}
