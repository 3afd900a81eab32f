//! Block Decompressor for DXT1 (BC1) surfaces.
//!
//! Each 4×4 block is 8 bytes: two little-endian RGB565 endpoints `c0`, `c1`
//! followed by a little-endian u32 holding sixteen 2-bit palette indices,
//! pixel `(px, py)` at bits `2 * (py * 4 + px)`. Blocks are stored row-major.
//!
//! The palette depends on how the endpoints compare as raw u16 values:
//! - `c0 > c1`: four opaque colors, `c0`, `c1`, `⅔c0 + ⅓c1`, `⅓c0 + ⅔c1`.
//! - `c0 <= c1`: three opaque colors `c0`, `c1`, `½c0 + ½c1`, plus
//!   transparent black.
//!
//! Blocks are independent and write disjoint pixels; edge blocks of images
//! whose dimensions are not multiples of 4 write only their in-bounds pixels.

use swgui_common::DecodedImage;

use crate::error::CodecError;
use crate::header::{BLOCK_BYTES, ContainerHeader};

/// An RGBA8 pixel.
pub type Rgba = [u8; 4];

const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Expand an RGB565 color to opaque RGBA8, rounding to nearest.
#[must_use]
pub fn unpack_565(color: u16) -> Rgba {
    let r5 = u32::from((color >> 11) & 0x1f);
    let g6 = u32::from((color >> 5) & 0x3f);
    let b5 = u32::from(color & 0x1f);
    [
        channel(r5 * 255 + 15, 31),
        channel(g6 * 255 + 31, 63),
        channel(b5 * 255 + 15, 31),
        255,
    ]
}

/// `numerator / denominator` for values known to fit in a byte.
fn channel(numerator: u32, denominator: u32) -> u8 {
    u8::try_from(numerator / denominator).unwrap_or(u8::MAX)
}

/// Weighted blend `(wa * a + wb * b) / (wa + wb)` per RGB channel, rounded
/// to nearest, opaque.
fn blend(a: Rgba, b: Rgba, wa: u32, wb: u32) -> Rgba {
    let total = wa + wb;
    let mix = |i: usize| {
        channel(
            wa * u32::from(a[i]) + wb * u32::from(b[i]) + total / 2,
            total,
        )
    };
    [mix(0), mix(1), mix(2), 255]
}

/// Build the four-entry palette for a block's endpoints.
#[must_use]
pub fn palette(c0: u16, c1: u16) -> [Rgba; 4] {
    let p0 = unpack_565(c0);
    let p1 = unpack_565(c1);
    if c0 > c1 {
        [p0, p1, blend(p0, p1, 2, 1), blend(p0, p1, 1, 2)]
    } else {
        [p0, p1, blend(p0, p1, 1, 1), TRANSPARENT]
    }
}

/// Decode one 8-byte block into `out` at block coordinates
/// `(block_x, block_y)`, skipping pixels outside `width` × `height`.
fn decode_block(
    block: &[u8],
    block_x: usize,
    block_y: usize,
    width: usize,
    height: usize,
    out: &mut [u8],
) {
    let c0 = u16::from_le_bytes([block[0], block[1]]);
    let c1 = u16::from_le_bytes([block[2], block[3]]);
    let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
    let colors = palette(c0, c1);

    for i in 0..16 {
        let x = block_x * 4 + i % 4;
        let y = block_y * 4 + i / 4;
        if x >= width || y >= height {
            continue;
        }
        let color = colors[((indices >> (2 * i)) & 0b11) as usize];
        let offset = (y * width + x) * DecodedImage::BYTES_PER_PIXEL;
        out[offset..offset + DecodedImage::BYTES_PER_PIXEL].copy_from_slice(&color);
    }
}

/// Decode the top-level surface described by `header` from `payload`.
///
/// `payload` is the data following the header (see
/// [`ContainerHeader::payload`]); bytes beyond the top-level surface (lower
/// mip levels) are ignored.
///
/// # Errors
///
/// [`CodecError::Truncated`] if `payload` is shorter than
/// `ceil(width / 4) * ceil(height / 4) * 8` bytes, and
/// [`CodecError::ImageTooLarge`] if the output buffer cannot be addressed.
pub fn decode_blocks(header: &ContainerHeader, payload: &[u8]) -> Result<DecodedImage, CodecError> {
    let needed = header.payload_len()?;
    if payload.len() < needed {
        return Err(CodecError::Truncated {
            needed,
            available: payload.len(),
        });
    }

    let too_large = CodecError::ImageTooLarge {
        width: header.width,
        height: header.height,
    };
    let width = usize::try_from(header.width).map_err(|_| too_large)?;
    let height = usize::try_from(header.height).map_err(|_| too_large)?;
    let out_len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(DecodedImage::BYTES_PER_PIXEL))
        .ok_or(too_large)?;
    let mut pixels = vec![0u8; out_len];

    let blocks_wide = width.div_ceil(4);
    if blocks_wide > 0 {
        for (index, block) in payload[..needed].chunks_exact(BLOCK_BYTES).enumerate() {
            decode_block(
                block,
                index % blocks_wide,
                index / blocks_wide,
                width,
                height,
                &mut pixels,
            );
        }
    }

    DecodedImage::new(header.width, header.height, pixels).ok_or(too_large)
}
