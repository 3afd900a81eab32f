//! Background texture decoding for the SWG UI editor.
//!
//! # Scope
//!
//! The map page's background is stored in a DDS container holding a single
//! block-compressed (DXT1 / BC1) surface. This crate turns those bytes into
//! an RGBA8 [`DecodedImage`] in three steps:
//!
//! 1. **Header** - [`parse_header()`] validates the 128-byte container header.
//! 2. **Blocks** - [`decode_blocks()`] expands 4×4 blocks into RGBA pixels.
//! 3. **Pipeline** - [`decode()`] chains the two behind one call, and the
//!    [`TextureDecoder`] trait exposes the codec to the renderer's loader.
//!
//! # Not Yet Implemented
//!
//! - Mip levels below the top surface
//! - Any fourCC other than `DXT1`

pub mod bc1;
pub mod decoder;
pub mod error;
pub mod header;

pub use bc1::decode_blocks;
pub use decoder::{Bc1Decoder, TextureDecoder, decode, is_container};
pub use error::CodecError;
pub use header::{ContainerHeader, parse_header};
pub use swgui_common::DecodedImage;
