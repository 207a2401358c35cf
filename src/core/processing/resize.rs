use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::PaddingParams;
use crate::error::{Error, Result};

/// Scales `(width, height)` so the longer side equals `content_size`.
///
/// The shorter side is `floor(content_size / aspect_ratio)` (or
/// `floor(content_size * aspect_ratio)` for portrait sources), evaluated in
/// `f64` with the aspect ratio as an intermediate. Square sources take the
/// landscape branch. A shorter side that floors to zero is kept at one pixel.
pub fn calculate_content_dimensions(width: u32, height: u32, content_size: u32) -> (u32, u32) {
    let aspect_ratio = width as f64 / height as f64;
    let content = content_size as f64;

    if width >= height {
        let minor = ((content / aspect_ratio) as u32).max(1);
        (content_size, minor)
    } else {
        let minor = ((content * aspect_ratio) as u32).max(1);
        (minor, content_size)
    }
}

/// Content dimensions for a source of `width x height` under `params`.
pub fn content_dimensions_for(width: u32, height: u32, params: &PaddingParams) -> (u32, u32) {
    calculate_content_dimensions(width, height, params.content_size())
}

/// Resizes an RGBA image with a Lanczos3 convolution.
///
/// Color is premultiplied by alpha during the convolution so transparent
/// pixels do not bleed dark fringes into opaque edges.
pub fn resize_rgba_image(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage> {
    let (source_width, source_height) = source.dimensions();
    if (source_width, source_height) == (target_width, target_height) {
        debug!(
            "Source already {}x{}, skipping resize",
            source_width, source_height
        );
        return Ok(source.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        source_width, source_height, target_width, target_height
    );

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        source_width,
        source_height,
        source.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {}x{} RGBA",
            target_width, target_height
        ))
    })
}
