use image::{Rgba, RgbaImage, imageops};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::ContentLayout;

/// Offsets that center `content_width x content_height` on a square canvas.
/// Floor division, so an odd remainder biases the content one pixel toward the
/// top/left.
pub fn center_offsets(canvas_size: u32, content_width: u32, content_height: u32) -> (u32, u32) {
    (
        canvas_size.saturating_sub(content_width) / 2,
        canvas_size.saturating_sub(content_height) / 2,
    )
}

pub fn centered_layout(canvas_size: u32, content_width: u32, content_height: u32) -> ContentLayout {
    let (offset_x, offset_y) = center_offsets(canvas_size, content_width, content_height);
    ContentLayout {
        canvas_size,
        content_width,
        content_height,
        offset_x,
        offset_y,
    }
}

pub fn transparent_canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

/// Alpha-composites `content` ("over") onto a fresh transparent square canvas,
/// centered. Returns the canvas and where the content landed.
pub fn composite_centered(content: &RgbaImage, canvas_size: u32) -> Result<(RgbaImage, ContentLayout)> {
    let (cols, rows) = content.dimensions();
    if cols > canvas_size || rows > canvas_size {
        return Err(Error::Processing(format!(
            "content {}x{} does not fit on {}x{} canvas",
            cols, rows, canvas_size, canvas_size
        )));
    }

    let layout = centered_layout(canvas_size, cols, rows);

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, layout.offset_x, layout.offset_y
    );
    info!("Final dimensions: {}x{}", canvas_size, canvas_size);

    let mut canvas = transparent_canvas(canvas_size);
    imageops::overlay(
        &mut canvas,
        content,
        layout.offset_x as i64,
        layout.offset_y as i64,
    );
    Ok((canvas, layout))
}
