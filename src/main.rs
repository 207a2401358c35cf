//! iconpad entrypoint.
//!
//! Pads the bundled logo once with the default parameters. Paths are fixed;
//! for other inputs use the library API (`iconpad::transform`).

use std::path::Path;

const INPUT_FILE: &str = "assets/images/logo.png";
const OUTPUT_FILE: &str = "assets/images/logo_padded.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    iconpad::transform_with_defaults(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE))?;
    Ok(())
}
