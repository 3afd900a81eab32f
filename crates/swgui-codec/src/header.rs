//! Container Header Parser.
//!
//! The container starts with a fixed 128-byte little-endian header:
//!
//! | Offset | Field | Type |
//! |---|---|---|
//! | 0 | magic (`"DDS "`) | u32 |
//! | 4 | header size (124) | u32 |
//! | 8 | flags | u32 |
//! | 12 | height | u32 |
//! | 16 | width | u32 |
//! | 28 | mip-map count | u32 |
//! | 80 | pixel-format flags | u32 |
//! | 84 | fourCC | u32 |
//! | 128 | payload | bytes |

use crate::error::CodecError;

/// The container signature, `"DDS "` read as a little-endian u32.
pub const MAGIC: u32 = u32::from_le_bytes(*b"DDS ");

/// The one supported compression tag, `"DXT1"`.
pub const FOURCC_DXT1: u32 = u32::from_le_bytes(*b"DXT1");

/// Pixel-format flag marking the surface as compressed (fourCC valid).
pub const PIXEL_FORMAT_FOURCC: u32 = 0x4;

/// Length of the fixed header; the payload starts right after it.
pub const HEADER_LEN: usize = 128;

/// Bytes per 4×4 block.
pub const BLOCK_BYTES: usize = 8;

const OFFSET_HEADER_SIZE: usize = 4;
const OFFSET_FLAGS: usize = 8;
const OFFSET_HEIGHT: usize = 12;
const OFFSET_WIDTH: usize = 16;
const OFFSET_MIP_MAP_COUNT: usize = 28;
const OFFSET_PIXEL_FORMAT_FLAGS: usize = 80;
const OFFSET_FOURCC: usize = 84;

/// Metadata read from a validated container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Signature, always [`MAGIC`] once parsed.
    pub magic: u32,
    /// Declared header size (124 in well-formed files; not enforced).
    pub header_size: u32,
    /// Header flags.
    pub flags: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Surface width in pixels.
    pub width: u32,
    /// Declared number of mip levels (only the first is decoded).
    pub mip_map_count: u32,
    /// Pixel-format flags; always has [`PIXEL_FORMAT_FOURCC`] once parsed.
    pub pixel_format_flags: u32,
    /// Compression tag, always [`FOURCC_DXT1`] once parsed.
    pub four_cc: u32,
}

/// Read a little-endian u32 at `offset`. Callers check the length first.
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    if let Some(src) = bytes.get(offset..offset + 4) {
        word.copy_from_slice(src);
    }
    u32::from_le_bytes(word)
}

/// Parse and validate the 128-byte header at the start of `bytes`.
///
/// Checks, in order: the magic number, the header length, the
/// compressed-format flag, and the compression tag. Only the header itself
/// must be present; the payload length is checked by
/// [`decode_blocks`](crate::decode_blocks).
///
/// # Errors
///
/// [`CodecError::BadMagic`], [`CodecError::Truncated`],
/// [`CodecError::UnsupportedPixelFormat`] or
/// [`CodecError::UnsupportedCompression`].
pub fn parse_header(bytes: &[u8]) -> Result<ContainerHeader, CodecError> {
    let truncated = CodecError::Truncated {
        needed: HEADER_LEN,
        available: bytes.len(),
    };

    // STEP 1: Signature
    if bytes.len() < 4 {
        return Err(truncated);
    }
    let magic = read_u32(bytes, 0);
    if magic != MAGIC {
        return Err(CodecError::BadMagic {
            found: magic,
            expected: MAGIC,
        });
    }

    if bytes.len() < HEADER_LEN {
        return Err(truncated);
    }

    // STEP 2: Pixel format must be compressed
    let pixel_format_flags = read_u32(bytes, OFFSET_PIXEL_FORMAT_FLAGS);
    if pixel_format_flags & PIXEL_FORMAT_FOURCC == 0 {
        return Err(CodecError::UnsupportedPixelFormat {
            flags: pixel_format_flags,
        });
    }

    // STEP 3: Only one block format is supported
    let four_cc = read_u32(bytes, OFFSET_FOURCC);
    if four_cc != FOURCC_DXT1 {
        return Err(CodecError::UnsupportedCompression { found: four_cc });
    }

    Ok(ContainerHeader {
        magic,
        header_size: read_u32(bytes, OFFSET_HEADER_SIZE),
        flags: read_u32(bytes, OFFSET_FLAGS),
        height: read_u32(bytes, OFFSET_HEIGHT),
        width: read_u32(bytes, OFFSET_WIDTH),
        mip_map_count: read_u32(bytes, OFFSET_MIP_MAP_COUNT),
        pixel_format_flags,
        four_cc,
    })
}

impl ContainerHeader {
    /// Number of blocks per row, `ceil(width / 4)`.
    #[must_use]
    pub const fn blocks_wide(&self) -> u32 {
        self.width.div_ceil(4)
    }

    /// Number of block rows, `ceil(height / 4)`.
    #[must_use]
    pub const fn blocks_high(&self) -> u32 {
        self.height.div_ceil(4)
    }

    /// Payload bytes needed for the top-level surface.
    ///
    /// # Errors
    ///
    /// [`CodecError::ImageTooLarge`] if the size does not fit in `usize`.
    pub fn payload_len(&self) -> Result<usize, CodecError> {
        let too_large = CodecError::ImageTooLarge {
            width: self.width,
            height: self.height,
        };
        let blocks = u64::from(self.blocks_wide()) * u64::from(self.blocks_high());
        let bytes = blocks.checked_mul(BLOCK_BYTES as u64).ok_or(too_large)?;
        usize::try_from(bytes).map_err(|_| too_large)
    }

    /// The payload slice of the container `bytes` this header was parsed
    /// from (everything after the fixed header).
    #[must_use]
    pub fn payload<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        bytes.get(HEADER_LEN..).unwrap_or(&[])
    }
}
