use crate::logger;
use crate::GlobalOpts;
use anyhow::{bail, Context, Result};
use clap::Parser;
use ghtag_manifest::{rewrite, FsSource, RewriteError, MANIFEST_FILE_NAME};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct UpdateCommand {
    /// Path to the package.json to rewrite
    pub manifest: PathBuf,

    /// Sibling project root to scan for matching repositories (repeatable)
    #[arg(short = 'p', long = "project", value_name = "DIR")]
    pub projects: Vec<PathBuf>,

    /// Print the rewritten manifest instead of writing it in place
    #[arg(long)]
    pub stdout: bool,
}

pub fn handle_update(cmd: UpdateCommand, _opts: GlobalOpts) -> Result<()> {
    logger::debug("Starting update command");

    if cmd.manifest.file_name().and_then(|n| n.to_str()) != Some(MANIFEST_FILE_NAME) {
        bail!("only package.json is supported at the moment");
    }

    let manifest_text = fs::read_to_string(&cmd.manifest)
        .with_context(|| format!("failed to read {}", cmd.manifest.display()))?;
    logger::debug(&format!(
        "Scanning {} sibling project(s)",
        cmd.projects.len()
    ));

    let output = match rewrite(&manifest_text, &cmd.projects, &FsSource) {
        Ok(output) => output,
        Err(RewriteError::NoDependenciesToUpdate) => {
            // Informational: nothing uses the github: scheme, so there is
            // nothing to do and the file is left untouched.
            logger::warn("No dependencies to update.");
            return Ok(());
        }
        Err(err @ RewriteError::InvalidManifestJson(_)) => {
            return Err(err).context("error parsing current file as JSON");
        }
        Err(err @ RewriteError::SerializeManifest(_)) => {
            return Err(err.into());
        }
    };

    for location in &output.updated {
        logger::info(&format!("Tagged {}", location));
    }

    if cmd.stdout {
        println!("{}", output.text);
    } else {
        fs::write(&cmd.manifest, &output.text)
            .with_context(|| format!("failed to write {}", cmd.manifest.display()))?;
    }

    if output.updated.is_empty() {
        logger::info("No matching sibling repositories contributed a version tag");
    } else {
        logger::success(&format!(
            "Updated {} dependenc{}",
            output.updated.len(),
            if output.updated.len() == 1 { "y" } else { "ies" }
        ));
    }

    Ok(())
}
