//! # Filesystem Writer
//!
//! Writes an [`ArtifactSet`] under a project root without ever replacing what
//! is already there.
//!
//! ## Process
//!
//! 1.  **Create Directories**: every directory the set requires is created
//!     recursively, including empty ones such as `assets/`.
//!
//! 2.  **Write Missing Files**: for each file, missing parent directories are
//!     created and the content is written only if the target path does not
//!     exist yet. Existing files are left untouched and reported.
//!
//! Running the same scaffold twice is therefore safe: edits made between runs
//! survive. Any I/O failure is returned as [`Error::Filesystem`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::{ArtifactSet, FileArtifact};
use crate::console_io::Output;
use crate::error::{Error, Result};

/// What happened to a single artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    AlreadyExists,
}

/// Paths touched by [`materialize`], relative to the root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::Filesystem {
        path: path.display().to_string(),
        message: format!("Failed to create directory: {}", e),
    })
}

/// Write `content` to `path` unless `path` already exists.
///
/// Prints `  + <path>` when the file is created and `  = (exists) <path>`
/// otherwise.
pub fn write_if_missing(path: &Path, content: &[u8], out: &mut dyn Output) -> Result<WriteStatus> {
    if path.exists() {
        out.line(&format!("  = (exists) {}", path.display()));
        return Ok(WriteStatus::AlreadyExists);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    fs::write(path, content).map_err(|e| Error::Filesystem {
        path: path.display().to_string(),
        message: format!("Failed to write file: {}", e),
    })?;

    out.line(&format!("  + {}", path.display()));
    Ok(WriteStatus::Created)
}

/// Write one artifact under `root`.
pub fn write_artifact(
    root: &Path,
    artifact: &FileArtifact,
    out: &mut dyn Output,
) -> Result<WriteStatus> {
    write_if_missing(&root.join(&artifact.path), &artifact.content, out)
}

/// Materialize a whole set under `root`, directories first.
pub fn materialize(root: &Path, set: &ArtifactSet, out: &mut dyn Output) -> Result<WriteReport> {
    create_dir_all(root)?;
    for dir in set.directories() {
        create_dir_all(&root.join(dir))?;
    }

    let mut report = WriteReport::default();
    for artifact in set.files() {
        match write_artifact(root, artifact, out)? {
            WriteStatus::Created => report.created.push(artifact.path.clone()),
            WriteStatus::AlreadyExists => report.skipped.push(artifact.path.clone()),
        }
    }

    log::debug!(
        "materialized {} file(s) under {}, {} already present",
        report.created.len(),
        root.display(),
        report.skipped.len()
    );
    Ok(report)
}
