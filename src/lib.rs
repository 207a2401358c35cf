#![doc = r#"
iconpad — pad an image with transparent margins and center it on a square canvas.

Icon pipelines (adaptive app icons in particular) need the visible artwork to
fill a known fraction of the final canvas. iconpad loads an image, scales it so
its longer side fills `1 - 2 * padding_percent` of the canvas edge while keeping
the aspect ratio, composites it centered onto a fully transparent
`target_size x target_size` canvas, and writes the result with its alpha channel.

Quick start: pad a file
-----------------------
```rust,no_run
use std::path::Path;
use iconpad::{transform, PaddingParams, TransformOutcome};

fn main() -> iconpad::Result<()> {
    let params = PaddingParams { padding_percent: 0.25, target_size: 1024 };

    match transform(Path::new("assets/logo.png"), Path::new("assets/logo_padded.png"), &params)? {
        TransformOutcome::Written { layout, .. } => println!("placed {layout}"),
        TransformOutcome::InputNotFound { input } => println!("{} not found", input.display()),
    }
    Ok(())
}
```

Pad in memory
-------------
```rust
use image::{DynamicImage, Rgba, RgbaImage};
use iconpad::{pad_image, PaddingParams};

fn main() -> iconpad::Result<()> {
    let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(800, 400, Rgba([255, 0, 0, 255])));
    let padded = pad_image(&logo, &PaddingParams::default())?;

    assert_eq!(padded.canvas.dimensions(), (1024, 1024));
    assert_eq!((padded.layout.offset_x, padded.layout.offset_y), (256, 384));
    Ok(())
}
```

Error handling
--------------
A missing input file is not an error: `transform` logs it and returns
`TransformOutcome::InputNotFound`. Everything else (padding outside `[0, 0.5)`,
an output extension without alpha support, decode and write failures) comes back
as `iconpad::Error`.

Useful modules
--------------
- [`api`] — `transform` and `pad_image`.
- [`core`] — parameters and the resize/padding primitives.
- [`io`] — image decoding and alpha-preserving encoding.
- [`types`] — `ContentLayout`, `OutputFormat`, `TransformOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{DEFAULT_PADDING_PERCENT, DEFAULT_TARGET_SIZE, PaddingParams};
pub use crate::core::processing::pipeline::{PaddedImage, content_layout};
pub use error::{Error, Result};
pub use types::{ContentLayout, OutputFormat, TransformOutcome};

pub use api::{pad_image, transform, transform_with_defaults};
