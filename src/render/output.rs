use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TipsError};

/// Convert an SVG document to PNG bytes at the given DPI.
pub fn svg_to_png(svg: &str, dpi: u32) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| TipsError::render(e.to_string()))?;

    let scale = dpi as f32 / 72.0;
    let size = tree.size();
    let w = (size.width() * scale).round() as u32;
    let h = (size.height() * scale).round() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| TipsError::render(format!("failed to create {w}x{h} pixmap")))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().map_err(|e| TipsError::render(e.to_string()))
}

/// Encode `svg` in the format named by `path`'s extension and write it,
/// replacing any existing file.
pub fn save_figure(svg: &str, path: &Path, dpi: u32) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let bytes = match ext.as_str() {
        "svg" => svg.as_bytes().to_vec(),
        "png" => svg_to_png(svg, dpi)?,
        "" => return Err(TipsError::render(format!("{} has no file extension", path.display()))),
        other => return Err(TipsError::render(format!("unsupported output format: {other}"))),
    };

    fs::write(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "figure written");
    Ok(())
}
