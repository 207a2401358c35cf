//! Core building blocks: padding parameters, content-dimension arithmetic,
//! resize, centering and compositing. These are internal primitives consumed
//! by the high-level `api` module.
pub mod params;
pub mod processing;
