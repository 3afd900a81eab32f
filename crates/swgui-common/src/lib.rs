//! Common utilities for the SWG UI editor core.
//!
//! This crate provides shared infrastructure used by the layout and codec crates:
//! - **Warning System** - colored, deduplicated terminal output for malformed input
//! - **Decoded Images** - the RGBA pixel buffer handed to the renderer

pub mod image;
pub mod warning;

pub use image::DecodedImage;
