// Saves the cup as a PNG.
// Visual: nothing changes on screen; a `latte-art-<time>.png` appears on disk.

use crate::error::Result;
use crate::surface::PaintSurface;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// `latte-art-<unix seconds>.png`; clocks before 1970 count as 0.
pub fn export_file_name(at: SystemTime) -> String {
    let secs = at.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    format!("latte-art-{secs}.png")
}

/// Write the current buffer into `dir` (created if missing) and return the file path.
pub fn save_png(surface: &PaintSurface, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(SystemTime::now()));
    surface.to_image().save_with_format(&path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), "exported latte art");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ESPRESSO, MILK};
    use std::time::Duration;

    #[test]
    fn file_name_uses_unix_seconds() {
        let at = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(export_file_name(at), "latte-art-1700000000.png");
        assert_eq!(export_file_name(UNIX_EPOCH - Duration::from_secs(5)), "latte-art-0.png");
    }

    #[test]
    fn saved_png_decodes_to_the_same_pixels() {
        let mut s = PaintSurface::new(12, 8).unwrap();
        s.clear(ESPRESSO);
        s.draw_circle(6, 4, 2, MILK);

        let dir = std::env::temp_dir().join(format!("latte-art-export-{}", std::process::id()));
        let path = save_png(&s, &dir).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (12, 8));
        assert_eq!(decoded.as_raw().as_slice(), s.get_pixels());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
