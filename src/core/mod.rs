//! Core functionality: editor session, file tracking, fonts and configuration

pub mod config;
pub mod error;
pub mod file_ref;
pub mod fonts;
pub mod session;
pub mod title;
