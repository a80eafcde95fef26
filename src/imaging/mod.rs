//! Image processing — pure Rust, zero external binaries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG)** | `image` crate |
//! | **Resize** | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` (quality) |
//! | **Encode → PNG** | `image::codecs::png::PngEncoder` (lossless) |
//! | **Encode → WebP** | `webp` crate (libwebp, lossy quality) |
//!
//! The module is split into:
//! - **Calculations**: pure functions for dimension math (unit testable)
//! - **Backend**: [`ImageBackend`] trait, mockable for pipeline tests
//! - **RustBackend**: the production implementation

pub mod backend;
pub mod calculations;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use rust_backend::RustBackend;
