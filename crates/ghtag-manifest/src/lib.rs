//! ghtag manifest rewriting
//!
//! This crate holds the core logic behind the `ghtag` CLI: scanning a
//! `package.json` for `github:` dependency specifiers, cross-referencing a
//! set of sibling project directories, and rewriting matched specifiers to
//! carry an explicit `#v<version>` tag taken from the sibling's own
//! manifest.
//!
//! The crate performs no I/O of its own beyond the [`ManifestSource`]
//! capability handed to it, so it can run against a real filesystem or an
//! in-memory fixture.

pub mod errors;
pub mod rewrite;
pub mod source;
pub mod types;

pub use errors::RewriteError;
pub use rewrite::{rewrite, RewriteOutput};
pub use source::{FsSource, ManifestSource, MemorySource};
pub use types::{CandidateManifest, TargetLocation, DEPENDENCY_FIELDS, MANIFEST_FILE_NAME};
