use image::RgbaImage;
use tracing::debug;

use crate::core::params::PaddingParams;
use crate::core::processing::padding::{centered_layout, composite_centered};
use crate::core::processing::resize::{content_dimensions_for, resize_rgba_image};
use crate::error::Result;
use crate::types::ContentLayout;

/// Result of in-memory padding
#[derive(Debug, Clone)]
pub struct PaddedImage {
    pub canvas: RgbaImage,
    pub layout: ContentLayout,
}

/// Geometry a `width x height` source would get under `params`, without
/// touching any pixels.
pub fn content_layout(width: u32, height: u32, params: &PaddingParams) -> Result<ContentLayout> {
    params.validate()?;
    let (content_width, content_height) = content_dimensions_for(width, height, params);
    Ok(centered_layout(
        params.target_size,
        content_width,
        content_height,
    ))
}

/// Resize `source` to its content dimensions and center it on a transparent
/// `target_size` canvas.
pub fn pad_rgba_pipeline(source: &RgbaImage, params: &PaddingParams) -> Result<PaddedImage> {
    let (width, height) = source.dimensions();
    let planned = content_layout(width, height, params)?;
    debug!("Planned layout: {}", planned);

    let resized = resize_rgba_image(source, planned.content_width, planned.content_height)?;
    let (canvas, layout) = composite_centered(&resized, params.target_size)?;

    Ok(PaddedImage { canvas, layout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn layout_for_reference_scenario() {
        let layout = content_layout(800, 400, &PaddingParams::default()).unwrap();
        assert_eq!(
            layout,
            ContentLayout {
                canvas_size: 1024,
                content_width: 512,
                content_height: 256,
                offset_x: 256,
                offset_y: 384,
            }
        );
    }

    #[test]
    fn layout_for_square_source_has_equal_offsets() {
        let layout = content_layout(37, 37, &PaddingParams::default()).unwrap();
        assert_eq!((layout.content_width, layout.content_height), (512, 512));
        assert_eq!(layout.offset_x, layout.offset_y);
    }

    #[test]
    fn layout_rejects_bad_padding() {
        assert!(content_layout(10, 10, &PaddingParams::with_padding(0.5)).is_err());
    }

    #[test]
    fn pipeline_output_is_canvas_sized() {
        let params = PaddingParams {
            padding_percent: 0.25,
            target_size: 64,
        };
        let source = RgbaImage::from_pixel(30, 10, Rgba([0, 255, 0, 255]));
        let padded = pad_rgba_pipeline(&source, &params).unwrap();

        assert_eq!(padded.canvas.dimensions(), (64, 64));
        assert_eq!(
            (padded.layout.content_width, padded.layout.content_height),
            (32, 10)
        );
        assert_eq!((padded.layout.offset_x, padded.layout.offset_y), (16, 27));
        assert_eq!(padded.canvas.get_pixel(0, 0).0[3], 0);
        assert_eq!(padded.canvas.get_pixel(63, 63).0[3], 0);
    }
}
