//! # respic
//!
//! Turn source photographs into responsively-sized, multi-format derivative
//! images plus the `<picture>` markup needed to serve them. One invocation:
//! give it image files, get back a sibling directory of resized variants per
//! file and a ready-to-paste HTML fragment on stdout.
//!
//! # Architecture: Per-File Pipeline
//!
//! Every input file runs the same strictly sequential pipeline, and files run
//! independently of each other on a bounded worker pool:
//!
//! ```text
//! resolve EXIF orientation → decode → upright transform
//!     → resize (width × density matrix) → encode (per-family codecs)
//!     → render <picture> fragment
//! ```
//!
//! A failure at any stage aborts that file only; the batch always runs to
//! completion and reports each failure with its file path.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable run configuration and width-list parsing |
//! | [`orientation`] | EXIF orientation resolution and the 8-way upright transform |
//! | [`imaging`] | Backend trait, pure-Rust backend, and pure dimension math |
//! | [`artifact`] | Source families, codecs, variant specs, and the ordered artifact index |
//! | [`markup`] | `<picture>` fragment rendering with breakpoint/fallback selection |
//! | [`pipeline`] | Per-file orchestrator and the parallel batch driver |
//! | [`output`] | CLI output formatting as pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The `<picture>` fragment is generated with [Maud](https://maud.lambda.xyz/),
//! a compile-time HTML macro. The source/fallback selection rule (every group
//! except the last becomes a `<source>`, the final same-width run drops its
//! `media` attribute, the very last group becomes the `<img>`) is ordinary
//! Rust control flow, so it can be unit tested as data-in/string-out instead
//! of hiding inside a template engine's evaluation order.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resizing (Lanczos3), and JPEG/PNG encoding use the `image`
//! crate; lossy WebP goes through libwebp via the `webp` crate because the
//! `image` crate only ships a lossless WebP encoder. No ImageMagick, no
//! system binaries to install.
//!
//! ## Bounded Parallelism
//!
//! Files fan out over a rayon pool sized by `--jobs` (default: one worker per
//! core). Decoded images can be large, so the pool bound caps peak memory
//! while keeping the per-file failure isolation of fully independent workers.

pub mod artifact;
pub mod config;
pub mod imaging;
pub mod markup;
pub mod orientation;
pub mod output;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_helpers;
