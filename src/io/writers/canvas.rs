use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Resolve the alpha-capable format for `output`, failing before any file
/// is created.
pub fn output_format_for(output: &Path) -> Result<OutputFormat> {
    OutputFormat::from_path(output).ok_or_else(|| Error::UnsupportedOutputFormat {
        path: output.to_path_buf(),
    })
}

pub fn write_rgba_image(output: &Path, canvas: &RgbaImage, format: OutputFormat) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    canvas
        .write_to(&mut writer, format.image_format())
        .map_err(|source| Error::ImageSave {
            path: output.to_path_buf(),
            source,
        })?;
    debug!(
        "Wrote {}x{} {} to {:?}",
        canvas.width(),
        canvas.height(),
        format,
        output
    );
    Ok(())
}
