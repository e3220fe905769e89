//! The dependency-URI rewrite pass
//!
//! One pass over the open manifest collects every `github:` specifier, then
//! each candidate directory's own `package.json` is consulted for a matching
//! repository URL and a version to tag the specifier with.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::errors::RewriteError;
use crate::source::ManifestSource;
use crate::types::{CandidateManifest, TargetLocation, DEPENDENCY_FIELDS, MANIFEST_FILE_NAME};

/// Repository URLs a candidate can contribute from. Anchored and
/// case-sensitive; `https://github.com/...` without the `git+`/`.git`
/// wrapping is deliberately not accepted.
#[allow(clippy::expect_used)]
static GITHUB_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^git\+https?://github\.com/([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)\.git$")
        .expect("github url pattern is valid")
});

const GITHUB_SCHEME: &str = "github:";

/// Result of a successful rewrite. `text` is always the re-serialized
/// manifest, even when no entry changed value.
#[derive(Debug)]
pub struct RewriteOutput {
    pub text: String,
    /// Dotted `field.name` paths of the entries that received a tag, in the
    /// order the candidate scan applied them.
    pub updated: Vec<String>,
}

/// Rewrite `github:` specifiers in `manifest_text`, tagging each with the
/// version of a matching repository found under one of `candidate_dirs`.
///
/// The caller decides what to do with the returned text; this function
/// performs no writes.
pub fn rewrite<P: AsRef<Path>>(
    manifest_text: &str,
    candidate_dirs: &[P],
    source: &dyn ManifestSource,
) -> Result<RewriteOutput, RewriteError> {
    let mut root: Map<String, Value> = serde_json::from_str(manifest_text)?;

    let targets = collect_targets(&root);
    if targets.is_empty() {
        return Err(RewriteError::NoDependenciesToUpdate);
    }
    debug!("found {} github: dependency target(s)", targets.len());

    let mut updated = Vec::new();
    for dir in candidate_dirs {
        trace!("checking candidate directory {}", dir.as_ref().display());
        let manifest_path = dir.as_ref().join(MANIFEST_FILE_NAME);
        if !source.exists(&manifest_path) {
            trace!("no {MANIFEST_FILE_NAME} in {}", dir.as_ref().display());
            continue;
        }

        let contents = match source.read_to_string(&manifest_path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("could not read {}: {err}", manifest_path.display());
                continue;
            }
        };
        let candidate: CandidateManifest = match serde_json::from_str(&contents) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!("JSON invalid for file {}: {err}", manifest_path.display());
                continue;
            }
        };

        let Some(url) = candidate.repository_url() else {
            continue;
        };
        let Some(captures) = GITHUB_URL_RE.captures(url) else {
            debug!("repository url {url} is not a taggable github url, skipping");
            continue;
        };
        let repo_uri = format!("{GITHUB_SCHEME}{}/{}", &captures[1], &captures[2]);

        if let (Some(location), Some(version)) = (targets.get(&repo_uri), candidate.version()) {
            set_specifier(&mut root, location, &format!("{repo_uri}#v{version}"));
            debug!("tagged {} with v{version}", location.dotted());
            updated.push(location.dotted());
        }
    }

    let text = serde_json::to_string_pretty(&root).map_err(RewriteError::SerializeManifest)?;
    Ok(RewriteOutput { text, updated })
}

/// Map every `github:` specifier, stripped of any `#tag`, to its location in
/// the manifest. Known quirk, kept for compatibility: if two entries
/// normalize to the same repository the later one overwrites the earlier
/// mapping, so only the last entry scanned gets retagged.
fn collect_targets(root: &Map<String, Value>) -> HashMap<String, TargetLocation> {
    let mut targets = HashMap::new();
    for field in DEPENDENCY_FIELDS {
        let Some(Value::Object(entries)) = root.get(field) else {
            continue;
        };
        for (name, specifier) in entries {
            let Some(specifier) = specifier.as_str() else {
                continue;
            };
            if !specifier.starts_with(GITHUB_SCHEME) {
                continue;
            }
            targets.insert(
                strip_tag(specifier).to_string(),
                TargetLocation {
                    field,
                    name: name.clone(),
                },
            );
        }
    }
    targets
}

/// Truncate a specifier at the last `#`, dropping any existing tag.
fn strip_tag(specifier: &str) -> &str {
    match specifier.rfind('#') {
        Some(idx) => &specifier[..idx],
        None => specifier,
    }
}

/// Two-segment deep-set into the parsed manifest. Both segments were
/// discovered during target collection, so no intermediate nodes are
/// created.
fn set_specifier(root: &mut Map<String, Value>, location: &TargetLocation, value: &str) {
    if let Some(Value::Object(entries)) = root.get_mut(location.field) {
        if let Some(slot) = entries.get_mut(&location.name) {
            *slot = Value::String(value.to_string());
        }
    }
}
