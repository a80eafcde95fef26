//! Artifact data model and deterministic naming.
//!
//! All derivative outputs for one source file land in a sibling directory
//! named after the source's stem:
//!
//! ```text
//! photo.jpg → photo/288w1d.webp    (288px wide, density 1, WebP)
//!             photo/288w1d.jpg
//!             photo/288w2d.webp    (576px wide, served at 2x)
//!             ...
//! ```
//!
//! `{width}w{density}d` keys are unique per (width, density) pair by
//! construction, so names never collide for one source. URL paths embedded in
//! markup always use forward slashes regardless of platform:
//! `{prefix}/{stem}/{width}w{density}d.{ext}`.
//!
//! The [`ArtifactIndex`] preserves generation order — widths in request
//! order, codecs in the family's fixed order within each width — because the
//! markup generator's fallback selection depends on it: the *last* group in
//! the index becomes the `<img>`.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no encoder path for '{0}' files")]
pub struct UnsupportedFamily(pub String);

/// Output codec for a derivative image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    WebP,
    Jpeg,
    Png,
}

impl Codec {
    /// File extension for artifacts of this codec.
    pub fn extension(self) -> &'static str {
        match self {
            Self::WebP => "webp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// MIME subtype used in `<source type="image/…">`.
    pub fn mime_subtype(self) -> &'static str {
        match self {
            Self::WebP => "webp",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }
}

/// Broad content class of a source image, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFamily {
    /// Continuous-tone sources (JPEG, HEIC): lossy derivatives pay off.
    Photographic,
    /// Flat-color sources (PNG): stay lossless.
    FlatColor,
}

impl SourceFamily {
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFamily> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "heic" => Ok(Self::Photographic),
            "png" => Ok(Self::FlatColor),
            other => Err(UnsupportedFamily(other.to_string())),
        }
    }

    /// Codec emission order, fixed per family. The markup fallback rule
    /// relies on it: the last codec of the largest width becomes the `<img>`,
    /// so JPEG (the universally decodable codec) comes after WebP.
    pub fn codecs(self) -> &'static [Codec] {
        match self {
            Self::Photographic => &[Codec::WebP, Codec::Jpeg],
            Self::FlatColor => &[Codec::Png],
        }
    }
}

/// One (requested width, density multiplier) cell of the variant matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub width: u32,
    pub density: u32,
}

impl VariantSpec {
    /// Realized pixel width: requested width scaled by the density multiplier.
    pub fn pixel_width(self) -> u32 {
        self.width * self.density
    }

    /// Codec-independent file stem, e.g. `288w2d`.
    pub fn file_stem(self) -> String {
        format!("{}w{}d", self.width, self.density)
    }
}

/// One written derivative file.
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    pub codec: Codec,
    pub spec: VariantSpec,
    /// URL path as embedded in markup (prefix applied, forward slashes).
    pub url_path: String,
}

/// All artifacts of one codec at one requested width, density-ascending.
#[derive(Debug, Clone)]
pub struct ArtifactGroup {
    pub codec: Codec,
    pub width: u32,
    pub artifacts: Vec<OutputArtifact>,
}

/// Ordered record of every group generated for one source file.
#[derive(Debug, Clone, Default)]
pub struct ArtifactIndex {
    groups: Vec<ArtifactGroup>,
}

impl ArtifactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. Insertion order is meaningful and preserved.
    pub fn push(&mut self, group: ArtifactGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[ArtifactGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total artifact count across all groups.
    pub fn artifact_count(&self) -> usize {
        self.groups.iter().map(|g| g.artifacts.len()).sum()
    }
}

/// Directory that receives all derivatives for `source`: the source path with
/// its extension stripped.
pub fn output_dir(source: &Path) -> PathBuf {
    source.with_extension("")
}

/// Filesystem path for one derivative of `source`.
pub fn artifact_path(source: &Path, spec: VariantSpec, codec: Codec) -> PathBuf {
    output_dir(source).join(format!("{}.{}", spec.file_stem(), codec.extension()))
}

/// URL path for one derivative, as embedded in markup.
pub fn url_path(prefix: &str, source: &Path, spec: VariantSpec, codec: Codec) -> String {
    let stem = output_dir(source)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(
        "{}/{}/{}.{}",
        prefix.trim_end_matches('/'),
        stem,
        spec.file_stem(),
        codec.extension()
    )
}
