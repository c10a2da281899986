//! Editor session: the buffer text, its associated file and the
//! Open / Save / Save As handlers that move text between them.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{EditorError, Result};
use super::file_ref::{self, FileReference, DEFAULT_FILE_NAME};
use super::title::WindowTitle;

/// Source of user-chosen paths. `None` means the dialog was cancelled.
pub trait FilePicker {
    /// Pick an existing markdown file to open
    fn pick_open(&mut self) -> Option<PathBuf>;
    /// Pick a save target, proposing `default_name`
    fn pick_save(&mut self, default_name: &str) -> Option<PathBuf>;
}

/// Result of a handler that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user dismissed the dialog
    Cancelled,
    /// Nothing to do (plain Save with no associated file)
    Skipped,
    /// Text was read from `path`
    Opened(PathBuf),
    /// Text was written to `path`
    Saved(PathBuf),
}

/// Editor state shared by the menu actions
#[derive(Debug, Clone)]
pub struct Session {
    /// Raw markdown being edited
    pub text: String,
    file: FileReference,
    title: WindowTitle,
}

impl Session {
    pub fn new(base_title: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            file: FileReference::new(),
            title: WindowTitle::new(base_title),
        }
    }

    pub fn file(&self) -> &FileReference {
        &self.file
    }

    pub fn save_enabled(&self) -> bool {
        self.file.save_enabled()
    }

    pub fn title(&self) -> String {
        self.title.text()
    }

    /// Ask the picker for a file and open it
    pub fn open_with(&mut self, picker: &mut dyn FilePicker) -> Result<ActionOutcome> {
        match picker.pick_open() {
            Some(path) => self.open_path(path),
            None => {
                tracing::debug!("Open cancelled");
                Ok(ActionOutcome::Cancelled)
            }
        }
    }

    /// Replace the buffer with the contents of `path`.
    ///
    /// Unsaved edits are discarded. On failure the session is unchanged.
    pub fn open_path(&mut self, path: PathBuf) -> Result<ActionOutcome> {
        let text = fs::read_to_string(&path).map_err(|source| EditorError::Read {
            path: path.clone(),
            source,
        })?;

        self.text = text;
        self.associate(path.clone());
        tracing::info!("Opened document: {}", path.display());
        Ok(ActionOutcome::Opened(path))
    }

    /// Write the buffer to the associated file, if any
    pub fn save(&self) -> Result<ActionOutcome> {
        let Some(path) = self.file.path() else {
            tracing::debug!("Save requested with no associated file");
            return Ok(ActionOutcome::Skipped);
        };

        write_text(path, &self.text)?;
        tracing::info!("Saved document: {}", path.display());
        Ok(ActionOutcome::Saved(path.to_path_buf()))
    }

    /// Ask the picker for a target and save the buffer there
    pub fn save_as_with(&mut self, picker: &mut dyn FilePicker) -> Result<ActionOutcome> {
        match picker.pick_save(DEFAULT_FILE_NAME) {
            Some(path) => self.save_as_path(path),
            None => {
                tracing::debug!("Save As cancelled");
                Ok(ActionOutcome::Cancelled)
            }
        }
    }

    /// Save the buffer to `path` and associate the session with it.
    ///
    /// Targets not ending in `.md` (any case) are rejected before writing.
    pub fn save_as_path(&mut self, path: PathBuf) -> Result<ActionOutcome> {
        if !file_ref::has_markdown_suffix(&path) {
            return Err(EditorError::ExtensionRejected { path });
        }

        write_text(&path, &self.text)?;
        self.associate(path.clone());
        tracing::info!("Saved document as: {}", path.display());
        Ok(ActionOutcome::Saved(path))
    }

    fn associate(&mut self, path: PathBuf) {
        self.title.set_document(file_ref::display_name(&path));
        self.file.set(path);
    }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    })
}
