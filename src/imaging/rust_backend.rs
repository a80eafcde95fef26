//! Pure Rust pixel backend.
//!
//! Everything is statically linked into the binary. HEIC is the one input
//! classified as photographic that has no pure-Rust decoder; it fails here
//! with a clear per-file error rather than pulling in a system libheif.

use super::backend::{BackendError, ImageBackend};
use crate::artifact::Codec;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::BufWriter;
use std::path::Path;

/// Production backend using the `image` crate plus libwebp for lossy WebP.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Encode lossy WebP through libwebp. Alpha is preserved when present.
fn save_webp(img: &DynamicImage, quality: u8, out: &Path) -> Result<(), BackendError> {
    let memory = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        webp::Encoder::from_rgba(&rgba, img.width(), img.height()).encode(f32::from(quality))
    } else {
        let rgb = img.to_rgb8();
        webp::Encoder::from_rgb(&rgb, img.width(), img.height()).encode(f32::from(quality))
    };
    std::fs::write(out, &*memory).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        if extension_of(path) == "heic" {
            return Err(BackendError::UnsupportedInput("heic".to_string()));
        }
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))
    }

    fn resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        img.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode(
        &self,
        img: &DynamicImage,
        codec: Codec,
        quality: u8,
        out: &Path,
    ) -> Result<(), BackendError> {
        match codec {
            Codec::Jpeg => {
                let file = std::fs::File::create(out).map_err(BackendError::Io)?;
                let writer = BufWriter::new(file);
                let encoder = JpegEncoder::new_with_quality(writer, quality);
                img.write_with_encoder(encoder)
                    .map_err(|e| BackendError::Encode(format!("JPEG: {e}")))
            }
            Codec::Png => {
                let file = std::fs::File::create(out).map_err(BackendError::Io)?;
                let writer = BufWriter::new(file);
                let encoder = PngEncoder::new(writer);
                img.write_with_encoder(encoder)
                    .map_err(|e| BackendError::Encode(format!("PNG: {e}")))
            }
            Codec::WebP => save_webp(img, quality, out),
        }
    }
}
