//! Image processing backend trait.
//!
//! [`ImageBackend`] defines the three pixel operations the pipeline needs:
//! decode, resize, and encode. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the recording
//! [`tests::MockBackend`] so orchestration logic can be exercised without
//! encoding a single real pixel.

use crate::artifact::Codec;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("no decoder for '{0}' input")]
    UnsupportedInput(String),
}

/// Trait for pixel backends.
///
/// `resize` is pure and infallible; decode and encode touch the filesystem
/// and can fail. Implementations must be `Sync` — the batch driver calls one
/// shared backend from rayon workers.
pub trait ImageBackend: Sync {
    /// Decode a source file into pixels.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Resize to exact target dimensions (aspect ratio is the caller's job).
    fn resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode pixels into `codec` at `quality` and write to `out`.
    ///
    /// Quality applies to lossy codecs only; PNG ignores it.
    fn encode(
        &self,
        img: &DynamicImage,
        codec: Codec,
        quality: u8,
        out: &Path,
    ) -> Result<(), BackendError>;
}
