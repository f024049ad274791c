use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::ColorImage;

// ---------------------------------------------------------------------------
// Preview image produced by a half-size dcraw run
// ---------------------------------------------------------------------------

/// A decoded preview, ready to upload as an egui texture.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixels: ColorImage,
}

/// Decode the PPM dcraw wrote (8 or 16 bit) into RGBA pixels.
pub fn load_preview(path: &Path) -> Result<PreviewImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Cannot preview that image: {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::info!("Loaded preview {} ({width}×{height})", path.display());

    let pixels = ColorImage::from_rgba_unmultiplied([width as usize, height as usize], rgba.as_raw());
    Ok(PreviewImage {
        path: path.to_path_buf(),
        width,
        height,
        pixels,
    })
}

/// Largest size that fits in `available` while keeping the aspect ratio.
/// Images already smaller than the box are shown at their own size.
pub fn fit_size(width: u32, height: u32, available: [f32; 2]) -> [f32; 2] {
    let (w, h) = (width as f32, height as f32);
    if w <= 0.0 || h <= 0.0 {
        return [0.0, 0.0];
    }
    let scale = (available[0] / w).min(available[1] / h).min(1.0).max(0.0);
    [w * scale, h * scale]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use eframe::egui::{self, Color32};

    /// Write an 8-bit binary PPM filled with grey.
    pub(crate) fn write_ppm(path: &Path, width: u32, height: u32) {
        let mut bytes = format!("P6\n{width} {height}\n255\n").into_bytes();
        bytes.extend(std::iter::repeat(128u8).take((width * height * 3) as usize));
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn reads_dimensions_of_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.ppm");
        write_ppm(&path, 16, 9);

        let preview = load_preview(&path).unwrap();
        assert_eq!((preview.width, preview.height), (16, 9));
        assert_eq!(preview.pixels.size, [16, 9]);
        assert_eq!(preview.pixels.pixels[0], Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn decoded_ppm_uploads_as_texture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("IMG_0001.ppm");
        write_ppm(&path, 4, 2);

        let preview = load_preview(&path).unwrap();
        let ctx = egui::Context::default();
        let texture = ctx.load_texture("preview", preview.pixels, egui::TextureOptions::LINEAR);
        assert_eq!(texture.size(), [4, 2]);
    }

    #[test]
    fn sixteen_bit_ppm_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.ppm");
        let mut bytes = b"P6\n2 1\n65535\n".to_vec();
        bytes.extend(std::iter::repeat([0xFFu8, 0xFF]).take(6).flatten());
        std::fs::write(&path, bytes).unwrap();

        let preview = load_preview(&path).unwrap();
        assert_eq!(preview.pixels.size, [2, 1]);
        assert_eq!(preview.pixels.pixels[1], Color32::WHITE);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_preview(&dir.path().join("nope.ppm")).unwrap_err();
        assert!(format!("{err:#}").starts_with("Cannot preview that image"));
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ppm");
        std::fs::write(&path, b"not a ppm").unwrap();
        assert!(load_preview(&path).is_err());
    }

    #[test]
    fn fit_keeps_aspect_ratio() {
        assert_eq!(fit_size(1000, 500, [500.0, 500.0]), [500.0, 250.0]);
        assert_eq!(fit_size(500, 1000, [500.0, 500.0]), [250.0, 500.0]);
        // Never upscaled.
        assert_eq!(fit_size(100, 50, [500.0, 500.0]), [100.0, 50.0]);
        assert_eq!(fit_size(0, 50, [500.0, 500.0]), [0.0, 0.0]);
    }
}
