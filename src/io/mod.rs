//! I/O layer: decoding source images into RGBA (`reader`) and encoding the
//! padded canvas with its alpha channel (`writers`).
pub mod reader;
pub use reader::{input_exists, load_rgba};

pub mod writers;
