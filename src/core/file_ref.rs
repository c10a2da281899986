//! Tracking of the file the buffer is associated with

use std::path::{Path, PathBuf};

/// Extensions offered by the open/save dialogs
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "MD"];

/// Default file name proposed by the Save As dialog
pub const DEFAULT_FILE_NAME: &str = "untitled.md";

/// The file last opened or saved-as. Empty until the first successful
/// Open or Save As, never cleared afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReference {
    path: Option<PathBuf>,
}

impl FileReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate the buffer with `path`
    pub fn set(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Plain Save is only available once a file is associated
    pub fn save_enabled(&self) -> bool {
        self.path.is_some()
    }
}

/// File name component of `path`, falling back to the whole path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Case-insensitive `.md` suffix check over the whole path string.
///
/// Only the suffix is inspected; the rest of the path is not validated.
pub fn has_markdown_suffix(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".md")
}
