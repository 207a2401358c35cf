//! High-level library API: pad an image file to an output file, or pad an
//! in-memory image. Prefer these entrypoints over the low-level processing
//! modules when integrating iconpad.
use std::path::Path;

use image::DynamicImage;
use tracing::{info, warn};

use crate::core::params::PaddingParams;
use crate::core::processing::pipeline::{PaddedImage, pad_rgba_pipeline};
use crate::error::{Error, Result};
use crate::io::writers::canvas::{output_format_for, write_rgba_image};
use crate::io::{input_exists, load_rgba};
use crate::types::TransformOutcome;

/// Pad an in-memory image onto a transparent square canvas (no disk I/O).
pub fn pad_image(image: &DynamicImage, params: &PaddingParams) -> Result<PaddedImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::InvalidArgument {
            arg: "image",
            value: format!("{}x{}", image.width(), image.height()),
        });
    }
    pad_rgba_pipeline(&image.to_rgba8(), params)
}

/// Load `input`, center it with transparent margins on a
/// `params.target_size` square canvas, and write the canvas to `output`.
///
/// A missing `input` is reported and returned as
/// [`TransformOutcome::InputNotFound`]; nothing is written in that case.
/// Invalid parameters, an output extension without alpha support, decode
/// failures and write failures are returned as errors.
pub fn transform(input: &Path, output: &Path, params: &PaddingParams) -> Result<TransformOutcome> {
    if !input_exists(input) {
        warn!("Error: {} not found", input.display());
        return Ok(TransformOutcome::InputNotFound {
            input: input.to_path_buf(),
        });
    }

    params.validate()?;
    let format = output_format_for(output)?;

    let source = load_rgba(input)?;
    let padded = pad_rgba_pipeline(&source, params)?;
    write_rgba_image(output, &padded.canvas, format)?;

    info!(
        "Success! Padded image saved to {} (Final size: {}x{})",
        output.display(),
        padded.canvas.width(),
        padded.canvas.height()
    );

    Ok(TransformOutcome::Written {
        output: output.to_path_buf(),
        layout: padded.layout,
    })
}

/// [`transform`] with the default 25% padding on a 1024x1024 canvas.
pub fn transform_with_defaults(input: &Path, output: &Path) -> Result<TransformOutcome> {
    transform(input, output, &PaddingParams::default())
}
