//! Shared helpers for building synthetic test images.
//!
//! Real encoders, tiny images. `write_jpeg_with_orientation` splices a
//! hand-built EXIF APP1 segment after the SOI marker, which lets tests
//! exercise any orientation code — including the invalid ones no encoder
//! would ever produce.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// An RGB image where every pixel is distinct, so flips and rotations are
/// observable.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_image(width, height).to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new(Cursor::new(&mut bytes))
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    bytes
}

/// Write a plain JPEG with no EXIF segment.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, jpeg_bytes(width, height)).unwrap();
}

/// Write a PNG.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = gradient_image(width, height).to_rgb8();
    let mut bytes = Vec::new();
    PngEncoder::new(Cursor::new(&mut bytes))
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    std::fs::write(path, bytes).unwrap();
}

/// Little-endian TIFF body holding a single Orientation (0x0112) SHORT tag
/// with the given values (1 or 2 of them fit inline).
fn tiff_with_orientation(values: &[u16]) -> Vec<u8> {
    assert!(!values.is_empty() && values.len() <= 2);
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes()); // IFD0 offset
    tiff.extend_from_slice(&1u16.to_le_bytes()); // entry count
    tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    tiff.extend_from_slice(&3u16.to_le_bytes()); // type SHORT
    tiff.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for v in values {
        tiff.extend_from_slice(&v.to_le_bytes());
    }
    for _ in 0..(2 - values.len()) {
        tiff.extend_from_slice(&[0, 0]); // pad value field to 4 bytes
    }
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD
    tiff
}

fn splice_exif(jpeg: &[u8], tiff: &[u8]) -> Vec<u8> {
    let mut app1 = Vec::from(&b"Exif\0\0"[..]);
    app1.extend_from_slice(tiff);
    let segment_len = (app1.len() + 2) as u16;

    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]); // rest of the JPEG after its SOI
    out
}

/// Write a JPEG whose EXIF Orientation tag holds `code` (any u16, including
/// invalid codes).
pub fn write_jpeg_with_orientation(path: &Path, width: u32, height: u32, code: u16) {
    let bytes = splice_exif(&jpeg_bytes(width, height), &tiff_with_orientation(&[code]));
    std::fs::write(path, bytes).unwrap();
}

/// Write a JPEG whose Orientation tag ambiguously holds two values.
pub fn write_jpeg_with_ambiguous_orientation(path: &Path, width: u32, height: u32) {
    let bytes = splice_exif(&jpeg_bytes(width, height), &tiff_with_orientation(&[1, 3]));
    std::fs::write(path, bytes).unwrap();
}
