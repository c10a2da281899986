//! Lookup of the fallback font used for scripts egui's bundled fonts lack

use std::path::{Path, PathBuf};

use ab_glyph::FontRef;
use directories::BaseDirs;
use walkdir::WalkDir;

use super::config::FontConfig;
use super::error::{EditorError, Result};

/// A font file found on disk that parses as TrueType/OpenType
#[derive(Debug, Clone)]
pub struct FallbackFont {
    pub name: String,
    pub path: PathBuf,
    pub data: Vec<u8>,
}

/// Directories searched for fonts: configured ones first, then the platform's
pub fn font_dirs(config: &FontConfig) -> Vec<PathBuf> {
    let mut dirs = config.search_dirs.clone();
    dirs.extend(platform_font_dirs());
    dirs
}

#[cfg(target_os = "linux")]
fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(base) = BaseDirs::new() {
        dirs.push(base.home_dir().join(".fonts"));
        dirs.push(base.data_local_dir().join("fonts"));
    }
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs
}

#[cfg(target_os = "macos")]
fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(base) = BaseDirs::new() {
        dirs.push(base.home_dir().join("Library/Fonts"));
    }
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    dirs
}

#[cfg(target_os = "windows")]
fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }
    if let Some(base) = BaseDirs::new() {
        dirs.push(base.data_local_dir().join("Microsoft/Windows/Fonts"));
    }
    dirs
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_font_dirs() -> Vec<PathBuf> {
    BaseDirs::new()
        .map(|base| vec![base.home_dir().join(".fonts")])
        .unwrap_or_default()
}

/// Find a font file by name (case-insensitive) under any of `dirs`
pub fn find_font(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let wanted = name.to_lowercase();
    dirs.iter().filter(|dir| dir.is_dir()).find_map(|dir| {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .find(|e| e.file_name().to_string_lossy().to_lowercase() == wanted)
            .map(|e| e.path().to_path_buf())
    })
}

/// Read a font file and make sure egui will be able to parse it
pub fn load_font(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).map_err(|e| {
        EditorError::Font(format!("Font read failed for {}: {}", path.display(), e))
    })?;

    FontRef::try_from_slice(&data).map_err(|e| {
        EditorError::Font(format!("Parse font data error for {}: {}", path.display(), e))
    })?;

    Ok(data)
}

/// Locate and load the configured fallback font
pub fn locate_fallback_font(config: &FontConfig) -> Result<Option<FallbackFont>> {
    let Some(name) = config.fallback_font.as_deref() else {
        return Ok(None);
    };

    let path = find_font(name, &font_dirs(config))
        .ok_or_else(|| EditorError::Font(format!("{} not found", name)))?;
    tracing::info!("Found '{}' in '{}'", name, path.display());

    let data = load_font(&path)?;
    Ok(Some(FallbackFont {
        name: name.to_string(),
        path,
        data,
    }))
}
