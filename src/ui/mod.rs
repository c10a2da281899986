//! UI components for mdpad

pub mod dialogs;
pub mod editor;
pub mod menu;
pub mod preview;
