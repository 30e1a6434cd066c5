use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb};

/// Writes a `0x00RRGGBB` framebuffer to `<dir>/frame-<frame>.png`.
pub fn save_png(
    buffer: &[u32],
    width: usize,
    height: usize,
    dir: impl AsRef<Path>,
    frame: u64,
) -> Result<PathBuf, image::ImageError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let image = ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let color = buffer[y as usize * width + x as usize];
        Rgb([(color >> 16) as u8, (color >> 8) as u8, color as u8])
    });

    let path = dir.join(format!("frame-{frame:06}.png"));
    image.save(&path)?;
    tracing::info!(path = %path.display(), "screenshot saved");
    Ok(path)
}
