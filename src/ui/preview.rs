//! Markdown preview panel using egui_commonmark

use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Rendered markdown preview
pub struct PreviewPanel;

impl PreviewPanel {
    /// Render the whole of `text` as markdown
    pub fn show(ui: &mut egui::Ui, cache: &mut CommonMarkCache, text: &str) {
        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                CommonMarkViewer::new().show(ui, cache, text);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::epaint::Shape;

    fn collect_text(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_string()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Run one headless frame showing the preview and return all painted text
    fn rendered_text(markdown: &str) -> Vec<String> {
        let ctx = egui::Context::default();
        let mut cache = CommonMarkCache::default();

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                PreviewPanel::show(ui, &mut cache, markdown);
            });
        });

        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut texts);
        }
        texts
    }

    #[test]
    fn test_preview_renders_buffer_as_markdown() {
        let texts = rendered_text("# Hi\n\nsome body text");

        assert!(texts.iter().any(|t| t.contains("Hi")));
        assert!(texts.iter().any(|t| t.contains("some body text")));
        // Heading markup is rendered, not shown raw
        assert!(!texts.iter().any(|t| t.contains("# Hi")));
    }

    #[test]
    fn test_preview_follows_buffer_changes() {
        assert!(rendered_text("first draft").iter().any(|t| t.contains("first draft")));

        let texts = rendered_text("second draft");
        assert!(texts.iter().any(|t| t.contains("second draft")));
        assert!(!texts.iter().any(|t| t.contains("first draft")));
    }
}
