//! Shared types used across iconpad.
//! Includes `ContentLayout` (the geometry of one padded canvas), the
//! alpha-capable `OutputFormat`s, and `TransformOutcome`.
use std::path::{Path, PathBuf};

/// Geometry of content centered on a square canvas
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ContentLayout {
    pub canvas_size: u32,
    pub content_width: u32,
    pub content_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl ContentLayout {
    pub fn margin_left(&self) -> u32 {
        self.offset_x
    }

    pub fn margin_right(&self) -> u32 {
        self.canvas_size - self.offset_x - self.content_width
    }

    pub fn margin_top(&self) -> u32 {
        self.offset_y
    }

    pub fn margin_bottom(&self) -> u32 {
        self.canvas_size - self.offset_y - self.content_height
    }
}

impl std::fmt::Display for ContentLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} content at ({}, {}) on {}x{} canvas",
            self.content_width,
            self.content_height,
            self.offset_x,
            self.offset_y,
            self.canvas_size,
            self.canvas_size
        )
    }
}

/// Encodings that keep the alpha channel
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Png,
    WebP, // lossless only
    Tiff,
}

impl OutputFormat {
    /// Picks the format from the path extension; `None` for formats without
    /// alpha (e.g. JPEG) and for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "webp" => Some(OutputFormat::WebP),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            _ => None,
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::WebP => image::ImageFormat::WebP,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::WebP => write!(f, "WebP"),
            OutputFormat::Tiff => write!(f, "TIFF"),
        }
    }
}

/// What a call to `transform` did
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TransformOutcome {
    Written {
        output: PathBuf,
        layout: ContentLayout,
    },
    /// The input path did not exist; nothing was written.
    InputNotFound { input: PathBuf },
}

impl TransformOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, TransformOutcome::Written { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_sum_to_canvas() {
        let layout = ContentLayout {
            canvas_size: 1024,
            content_width: 511,
            content_height: 256,
            offset_x: 256,
            offset_y: 384,
        };
        assert_eq!(layout.margin_left(), 256);
        assert_eq!(layout.margin_right(), 257);
        assert_eq!(layout.margin_top(), 384);
        assert_eq!(layout.margin_bottom(), 384);
    }

    #[test]
    fn output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("icon.PNG")),
            Some(OutputFormat::Png)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("a/b/icon.webp")),
            Some(OutputFormat::WebP)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("icon.tif")),
            Some(OutputFormat::Tiff)
        );
        assert_eq!(OutputFormat::from_path(Path::new("icon.jpg")), None);
        assert_eq!(OutputFormat::from_path(Path::new("icon")), None);
    }
}
