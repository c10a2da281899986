//! Markdown input panel

use eframe::egui;

use crate::core::config::EditorConfig;

/// Plain-text markdown input
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor over `text`; returns true when the text was edited
    pub fn show(ui: &mut egui::Ui, text: &mut String, config: &EditorConfig) -> bool {
        let font = if config.monospace {
            egui::FontId::monospace(config.font_size)
        } else {
            egui::FontId::proportional(config.font_size)
        };

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                egui::TextEdit::multiline(text)
                    .font(font)
                    .hint_text("Type markdown here")
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .show(ui)
                    .response
                    .changed()
            })
            .inner
    }
}
