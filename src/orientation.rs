//! EXIF orientation resolution and the upright transform.
//!
//! Cameras store sensor data unrotated and record how to display it in the
//! EXIF Orientation tag (1–8). Resolution and correction are split:
//!
//! - [`resolve_orientation`] reads the tag from the file container. Absence
//!   of EXIF data (every PNG, most screenshots) is not an error and resolves
//!   to [`Orientation::Normal`]. A *present but malformed* tag is an error:
//!   proceeding with a possibly wrong rotation would silently corrupt every
//!   derivative, so the file is aborted instead.
//! - [`Orientation::apply`] performs the geometric correction. Pure, no I/O.
//!
//! The transform table uses the image crate's clockwise rotation convention
//! and matches the standard EXIF correction table exactly; codes 5–8 swap the
//! bounding box.

use image::DynamicImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrientationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed EXIF data: {0}")]
    Malformed(#[from] exif::Error),
    #[error("orientation tag holds {0} values, expected exactly one")]
    Ambiguous(usize),
    #[error("orientation tag has a non-integer value type")]
    WrongValueType,
    #[error("cannot work with orientation {0}")]
    UnsupportedCode(u32),
}

/// One of the eight EXIF orientations, named after its correction transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// EXIF 1 — already upright.
    Normal,
    /// EXIF 2 — mirrored horizontally.
    FlipH,
    /// EXIF 3 — rotated 180°.
    Rotate180,
    /// EXIF 4 — mirrored vertically.
    FlipV,
    /// EXIF 5 — reflected over the main diagonal.
    Transpose,
    /// EXIF 6 — needs a 90° clockwise rotation.
    Rotate90,
    /// EXIF 7 — reflected over the anti-diagonal.
    Transverse,
    /// EXIF 8 — needs a 270° clockwise rotation.
    Rotate270,
}

impl Orientation {
    /// Map an EXIF code (1–8) to its orientation. Anything else is an error,
    /// never silently normalized.
    pub fn from_code(code: u32) -> Result<Self, OrientationError> {
        match code {
            1 => Ok(Self::Normal),
            2 => Ok(Self::FlipH),
            3 => Ok(Self::Rotate180),
            4 => Ok(Self::FlipV),
            5 => Ok(Self::Transpose),
            6 => Ok(Self::Rotate90),
            7 => Ok(Self::Transverse),
            8 => Ok(Self::Rotate270),
            other => Err(OrientationError::UnsupportedCode(other)),
        }
    }

    /// The EXIF code this orientation was parsed from.
    pub fn code(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::FlipH => 2,
            Self::Rotate180 => 3,
            Self::FlipV => 4,
            Self::Transpose => 5,
            Self::Rotate90 => 6,
            Self::Transverse => 7,
            Self::Rotate270 => 8,
        }
    }

    /// Whether the correction swaps width and height (codes 5–8).
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90 | Self::Transverse | Self::Rotate270
        )
    }

    /// Apply the correction, producing an upright image.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => img,
            Self::FlipH => img.fliph(),
            Self::Rotate180 => img.rotate180(),
            Self::FlipV => img.rotate180().fliph(),
            Self::Transpose => img.rotate90().fliph(),
            Self::Rotate90 => img.rotate90(),
            Self::Transverse => img.rotate270().fliph(),
            Self::Rotate270 => img.rotate270(),
        }
    }
}

/// Read the stored orientation for a file.
///
/// Both single-SHORT and list-of-one-SHORT encodings are normalized here at
/// the resolver boundary; any other value shape is a metadata error.
pub fn resolve_orientation(path: &Path) -> Result<Orientation, OrientationError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let data = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(data) => data,
        // No EXIF segment at all — not an error, the image is taken as-is.
        Err(exif::Error::NotFound(_)) => return Ok(Orientation::Normal),
        Err(e) => return Err(OrientationError::Malformed(e)),
    };

    let Some(field) = data.get_field(exif::Tag::Orientation, exif::In::PRIMARY) else {
        return Ok(Orientation::Normal);
    };

    match &field.value {
        exif::Value::Short(values) => match values.as_slice() {
            [code] => Orientation::from_code(u32::from(*code)),
            _ => Err(OrientationError::Ambiguous(values.len())),
        },
        _ => Err(OrientationError::WrongValueType),
    }
}
