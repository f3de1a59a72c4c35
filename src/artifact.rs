//! In-memory description of a scaffold before it touches the disk

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single file to materialize under a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    /// Path relative to the project root
    pub path: PathBuf,
    /// File content as bytes
    pub content: Vec<u8>,
}

impl FileArtifact {
    /// Create a new artifact with content
    pub fn new<P: AsRef<Path>>(path: P, content: Vec<u8>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            content,
        }
    }

    /// Create a new artifact from string content
    pub fn from_string<P: AsRef<Path>>(path: P, content: &str) -> Self {
        Self::new(path, content.as_bytes().to_vec())
    }

    /// Content as text, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Get file size in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered set of files and directories produced by a template
///
/// Paths are kept sorted so the writer reports them in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    files: BTreeMap<PathBuf, FileArtifact>,
    /// Directories that must exist even when nothing is written into them
    directories: Vec<PathBuf>,
}

impl ArtifactSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn add_file(&mut self, artifact: FileArtifact) {
        self.files.insert(artifact.path.clone(), artifact);
    }

    /// Add a file with string content
    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) {
        self.add_file(FileArtifact::from_string(path, content));
    }

    /// Require a directory, possibly empty
    pub fn add_directory<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref().to_path_buf();
        if !self.directories.contains(&path) {
            self.directories.push(path);
        }
    }

    /// Get a file by path
    pub fn get_file<P: AsRef<Path>>(&self, path: P) -> Option<&FileArtifact> {
        self.files.get(path.as_ref())
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// Iterate over files in path order
    pub fn files(&self) -> impl Iterator<Item = &FileArtifact> {
        self.files.values()
    }

    /// Directories that must exist
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the set has no files and no directories
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}
