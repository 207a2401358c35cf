//! Crate-level error type and `Result` alias for structured error handling.
//! Wraps decode/encode, resize and I/O failures, and provides semantic variants
//! for parameter validation. A missing input file is not an error here; see
//! `TransformOutcome::InputNotFound`.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels: {path}")]
    EmptyImage { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Content area collapses to {width}x{height} pixels")]
    DegenerateContent { width: u32, height: u32 },

    #[error("Output format does not support transparency or is unknown: {path}")]
    UnsupportedOutputFormat { path: PathBuf },

    #[error("Resize buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Processing error: {0}")]
    Processing(String),
}
