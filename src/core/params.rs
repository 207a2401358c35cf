use crate::error::{Error, Result};

/// Fraction of the canvas reserved as margin on each side when none is given.
pub const DEFAULT_PADDING_PERCENT: f64 = 0.25;

/// Edge length of the square output canvas.
pub const DEFAULT_TARGET_SIZE: u32 = 1024;

/// Padding parameters for a single transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingParams {
    /// Margin per side as a fraction of `target_size`, in `[0, 0.5)`
    pub padding_percent: f64,
    /// Output canvas edge length in pixels
    pub target_size: u32,
}

impl Default for PaddingParams {
    fn default() -> Self {
        Self {
            padding_percent: DEFAULT_PADDING_PERCENT,
            target_size: DEFAULT_TARGET_SIZE,
        }
    }
}

impl PaddingParams {
    pub fn with_padding(padding_percent: f64) -> Self {
        Self {
            padding_percent,
            ..Self::default()
        }
    }

    /// Fraction of the canvas edge left for the content: `1 - 2 * padding_percent`.
    pub fn content_scale(&self) -> f64 {
        1.0 - 2.0 * self.padding_percent
    }

    /// Length of the content's dominant axis, floored.
    pub fn content_size(&self) -> u32 {
        (self.target_size as f64 * self.content_scale()).floor() as u32
    }

    /// Rejects padding outside `[0, 0.5)`, a zero canvas, and a canvas too small
    /// to hold a single content pixel.
    pub fn validate(&self) -> Result<()> {
        if !self.padding_percent.is_finite()
            || self.padding_percent < 0.0
            || self.padding_percent >= 0.5
        {
            return Err(Error::InvalidArgument {
                arg: "padding_percent",
                value: self.padding_percent.to_string(),
            });
        }
        if self.target_size == 0 {
            return Err(Error::ZeroSize {
                size: self.target_size,
            });
        }
        let content = self.content_size();
        if content == 0 {
            return Err(Error::DegenerateContent {
                width: content,
                height: content,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_half_canvas_content() {
        let params = PaddingParams::default();
        assert_eq!(params.content_scale(), 0.5);
        assert_eq!(params.content_size(), 512);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn content_size_is_floored() {
        let params = PaddingParams::with_padding(0.1);
        // 1024 * 0.8 = 819.2
        assert_eq!(params.content_size(), 819);
    }

    #[test]
    fn zero_padding_fills_canvas() {
        let params = PaddingParams::with_padding(0.0);
        assert_eq!(params.content_size(), 1024);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_padding_out_of_range() {
        for bad in [0.5, 0.75, -0.1, f64::NAN, f64::INFINITY] {
            let err = PaddingParams::with_padding(bad).validate().unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument { arg: "padding_percent", .. }),
                "padding {bad} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_zero_target() {
        let params = PaddingParams {
            target_size: 0,
            ..PaddingParams::default()
        };
        assert!(matches!(params.validate(), Err(Error::ZeroSize { size: 0 })));
    }

    #[test]
    fn rejects_canvas_with_no_content_pixels() {
        let params = PaddingParams {
            padding_percent: 0.25,
            target_size: 1,
        };
        assert!(matches!(
            params.validate(),
            Err(Error::DegenerateContent { .. })
        ));
    }
}
