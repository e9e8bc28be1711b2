use crate::error::{BookmarkrError, Result};
use base64::Engine;
use std::fs;
use std::path::Path;

/// Turns a `--cover` argument into the stored cover reference.
///
/// URLs and data URLs are kept as given; anything else is read as an image file and
/// embedded as a data URL.
pub fn resolve_cover(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if is_url(trimmed) {
        return Ok(trimmed.to_string());
    }
    data_url_from_file(Path::new(trimmed))
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("data:")
}

/// Reads an image file into a `data:<mime>;base64,...` URL.
pub fn data_url_from_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        BookmarkrError::InvalidInput(format!("cannot read cover {}: {}", path.display(), e))
    })?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime_for(path), encoded))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
