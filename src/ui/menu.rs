//! File menu and its keyboard shortcuts

use egui::{Key, KeyboardShortcut, Modifiers};

/// Action requested through the menu or a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Save,
    SaveAs,
}

const OPEN: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const SAVE_AS: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::S);

/// Top menu bar
pub struct MenuBar;

impl MenuBar {
    /// Render the menu bar. Save is only clickable when `save_enabled`.
    pub fn show(ctx: &egui::Context, save_enabled: bool) -> Option<MenuAction> {
        let mut action = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let open = egui::Button::new("Open...")
                        .shortcut_text(ctx.format_shortcut(&OPEN));
                    if ui.add(open).clicked() {
                        action = Some(MenuAction::Open);
                        ui.close();
                    }

                    let save = egui::Button::new("Save")
                        .shortcut_text(ctx.format_shortcut(&SAVE));
                    if ui.add_enabled(save_enabled, save).clicked() {
                        action = Some(MenuAction::Save);
                        ui.close();
                    }

                    let save_as = egui::Button::new("Save As...")
                        .shortcut_text(ctx.format_shortcut(&SAVE_AS));
                    if ui.add(save_as).clicked() {
                        action = Some(MenuAction::SaveAs);
                        ui.close();
                    }
                });
            });
        });

        action
    }

    /// Consume a pressed shortcut, if any
    pub fn shortcut(ctx: &egui::Context) -> Option<MenuAction> {
        ctx.input_mut(|i| {
            // Save As first: Ctrl+S also matches while Shift is held
            if i.consume_shortcut(&SAVE_AS) {
                Some(MenuAction::SaveAs)
            } else if i.consume_shortcut(&SAVE) {
                Some(MenuAction::Save)
            } else if i.consume_shortcut(&OPEN) {
                Some(MenuAction::Open)
            } else {
                None
            }
        })
    }
}
