//! Texture decoding pipeline.
//!
//! Ties the header parser and the block decompressor together behind a
//! single `decode(bytes)` entry point, and exposes them through the
//! [`TextureDecoder`] trait so the renderer's loader can hold decoders
//! behind one interface.

use swgui_common::DecodedImage;

use crate::bc1::decode_blocks;
use crate::error::CodecError;
use crate::header::{MAGIC, parse_header};

/// True if `bytes` start with the container signature.
#[must_use]
pub fn is_container(bytes: &[u8]) -> bool {
    bytes
        .get(..4)
        .is_some_and(|head| head == MAGIC.to_le_bytes().as_slice())
}

/// Parse the header of `bytes` and decode its top-level surface.
///
/// # Errors
///
/// Any [`CodecError`] from [`parse_header`] or [`decode_blocks`].
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, CodecError> {
    let header = parse_header(bytes)?;
    decode_blocks(&header, header.payload(bytes))
}

/// A decoder that can turn raw bytes into a [`DecodedImage`].
pub trait TextureDecoder {
    /// Human-readable name (for diagnostics).
    fn name(&self) -> &'static str;

    /// Whether this decoder recognizes `bytes`.
    fn supports(&self, bytes: &[u8]) -> bool;

    /// Attempt to decode `bytes` into a [`DecodedImage`].
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the bytes cannot be decoded by this decoder.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError>;
}

/// Decodes DDS containers holding a DXT1 surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bc1Decoder;

impl TextureDecoder for Bc1Decoder {
    fn name(&self) -> &'static str {
        "DDS (DXT1)"
    }

    fn supports(&self, bytes: &[u8]) -> bool {
        is_container(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError> {
        decode(bytes)
    }
}
