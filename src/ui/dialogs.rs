//! Native file dialogs and modal notices

use std::path::PathBuf;

use eframe::egui;

use crate::core::error::{EditorError, Severity};
use crate::core::file_ref::MARKDOWN_EXTENSIONS;
use crate::core::session::FilePicker;

/// File picker backed by the platform's native dialogs
#[derive(Debug, Default)]
pub struct NativeFilePicker {
    /// Directory the next dialog starts in
    last_dir: Option<PathBuf>,
}

impl NativeFilePicker {
    fn dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().add_filter("Markdown", MARKDOWN_EXTENSIONS);
        match &self.last_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember(&mut self, picked: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(dir) = picked.as_ref().and_then(|p| p.parent()) {
            self.last_dir = Some(dir.to_path_buf());
        }
        picked
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_open(&mut self) -> Option<PathBuf> {
        let picked = self.dialog().set_title("Open").pick_file();
        self.remember(picked)
    }

    fn pick_save(&mut self, default_name: &str) -> Option<PathBuf> {
        let picked = self
            .dialog()
            .set_title("Save As")
            .set_file_name(default_name)
            .save_file();
        self.remember(picked)
    }
}

/// A message waiting to be acknowledged by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self.severity {
            Severity::Information => "Information",
            Severity::Error => "Error",
        }
    }
}

impl From<&EditorError> for Notice {
    fn from(err: &EditorError) -> Self {
        Self {
            severity: err.severity(),
            message: err.to_string(),
        }
    }
}

/// Show `notice` as a centered window; clears it when dismissed
pub fn show_notice(ctx: &egui::Context, notice: &mut Option<Notice>) {
    let Some(current) = notice.as_ref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(current.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if current.severity == Severity::Error {
                ui.label(egui::RichText::new("⚠").size(24.0));
            }
            ui.label(&current.message);
            ui.separator();
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        *notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_from_rejection() {
        let err = EditorError::ExtensionRejected {
            path: PathBuf::from("notes.txt"),
        };
        let notice = Notice::from(&err);
        assert_eq!(notice.title(), "Information");
        assert_eq!(notice.message, "Use .md or .MD as the file suffix");
    }

    #[test]
    fn test_notice_from_io_error() {
        let err = EditorError::Read {
            path: PathBuf::from("gone.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let notice = Notice::from(&err);
        assert_eq!(notice.title(), "Error");
        assert!(notice.message.contains("gone.md"));
    }

    #[test]
    fn test_picker_remembers_directory() {
        let mut picker = NativeFilePicker::default();
        let picked = picker.remember(Some(PathBuf::from("/docs/notes.md")));
        assert_eq!(picked, Some(PathBuf::from("/docs/notes.md")));
        assert_eq!(picker.last_dir, Some(PathBuf::from("/docs")));

        assert_eq!(picker.remember(None), None);
        assert_eq!(picker.last_dir, Some(PathBuf::from("/docs")));
    }
}
