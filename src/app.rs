//! Main application state and UI coordination

use std::sync::Arc;

use eframe::egui;
use egui_commonmark::CommonMarkCache;

use crate::core::{
    config::{AppConfig, FontConfig},
    error::{Result, Severity},
    fonts,
    session::{ActionOutcome, FilePicker, Session},
};
use crate::ui::{
    dialogs::{self, NativeFilePicker, Notice},
    editor::EditorPanel,
    menu::{MenuAction, MenuBar},
    preview::PreviewPanel,
};

/// Main application state
pub struct MdpadApp {
    /// Buffer text and associated file
    pub session: Session,
    /// Application configuration
    pub config: AppConfig,
    /// Dialog source for Open / Save As
    picker: Box<dyn FilePicker>,
    /// Error or information message awaiting acknowledgement
    notice: Option<Notice>,
    /// Title last sent to the viewport
    shown_title: String,
    /// Commonmark cache for preview
    commonmark_cache: CommonMarkCache,
}

impl MdpadApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::configure_fonts(&cc.egui_ctx, &config.fonts);
        Self::with_picker(config, Box::new(NativeFilePicker::default()))
    }

    /// Build the state around a given picker, without touching egui
    fn with_picker(config: AppConfig, picker: Box<dyn FilePicker>) -> Self {
        let session = Session::new(config.window.title.clone());
        let shown_title = session.title();

        Self {
            session,
            config,
            picker,
            notice: None,
            shown_title,
            commonmark_cache: CommonMarkCache::default(),
        }
    }

    /// Install the fallback font behind egui's defaults, if one can be found
    fn configure_fonts(ctx: &egui::Context, config: &FontConfig) {
        let font = match fonts::locate_fallback_font(config) {
            Ok(Some(font)) => font,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("{}; non-Latin glyphs may not render", e);
                return;
            }
        };

        let mut definitions = egui::FontDefinitions::default();
        definitions.font_data.insert(
            font.name.clone(),
            Arc::new(egui::FontData::from_owned(font.data)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            definitions
                .families
                .entry(family)
                .or_default()
                .push(font.name.clone());
        }
        ctx.set_fonts(definitions);

        tracing::info!("Installed fallback font from {}", font.path.display());
    }

    /// Run a menu action, turning failures into a notice
    pub fn handle_action(&mut self, action: MenuAction) {
        match self.run_action(action) {
            Ok(ActionOutcome::Opened(path)) | Ok(ActionOutcome::Saved(path)) => {
                tracing::debug!("{:?} finished: {}", action, path.display());
            }
            Ok(outcome) => tracing::debug!(
                file = ?self.session.file().path(),
                "{:?}: {:?}",
                action,
                outcome
            ),
            Err(e) => {
                match e.severity() {
                    Severity::Information => {
                        tracing::info!(path = ?e.path(), "{:?} refused: {}", action, e)
                    }
                    Severity::Error => {
                        tracing::error!(path = ?e.path(), "{:?} failed: {}", action, e)
                    }
                }
                self.notice = Some(Notice::from(&e));
            }
        }
    }

    fn run_action(&mut self, action: MenuAction) -> Result<ActionOutcome> {
        match action {
            MenuAction::Open => self.session.open_with(self.picker.as_mut()),
            MenuAction::Save => self.session.save(),
            MenuAction::SaveAs => self.session.save_as_with(self.picker.as_mut()),
        }
    }

    /// Push the session title to the window when it changed
    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.session.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl eframe::App for MdpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let shortcut = MenuBar::shortcut(ctx);
        let clicked = MenuBar::show(ctx, self.session.save_enabled());
        if let Some(action) = clicked.or(shortcut) {
            self.handle_action(action);
        }

        self.sync_title(ctx);
        dialogs::show_notice(ctx, &mut self.notice);

        // Split view: editor on left, preview on right
        egui::CentralPanel::default().show(ctx, |ui| {
            let available_width = ui.available_width();
            ui.horizontal_top(|ui| {
                ui.set_min_width(available_width);

                ui.vertical(|ui| {
                    ui.set_width(available_width / 2.0 - 4.0);
                    if EditorPanel::show(ui, &mut self.session.text, &self.config.editor) {
                        tracing::trace!("Buffer changed ({} bytes)", self.session.text.len());
                    }
                });

                ui.separator();

                // Re-render from the current buffer every frame
                ui.vertical(|ui| {
                    ui.set_width(available_width / 2.0 - 4.0);
                    PreviewPanel::show(ui, &mut self.commonmark_cache, &self.session.text);
                });
            });
        });
    }
}
