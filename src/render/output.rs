use std::path::Path;

use crate::{
    foundation::error::{HierError, HierResult},
    render::FrameRGBA,
};

/// Write `frame` to `path` as an RGBA PNG, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> HierResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            HierError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let straight = frame.to_straight();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| HierError::render(format!("write png '{}': {e}", path.display())))?;

    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

/// File name of frame `index` inside a frame sequence directory.
pub fn sequence_file_name(index: u64) -> String {
    format!("frame_{index:05}.png")
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
