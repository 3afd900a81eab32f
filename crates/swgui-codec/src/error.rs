//! Codec error taxonomy.

use thiserror::Error;

/// Errors returned while parsing or decoding a texture container.
///
/// All of them are fatal to the current decode call; the caller decides
/// whether to render without a background or substitute a placeholder.
/// Decoding is deterministic, so retrying never helps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The first four bytes are not the container signature.
    #[error("bad magic number {found:#010x} (expected {expected:#010x})")]
    BadMagic {
        /// The magic number that was read.
        found: u32,
        /// The signature that was expected.
        expected: u32,
    },

    /// The pixel format is not flagged as compressed.
    #[error("unsupported pixel format flags {flags:#x} (compressed-format bit not set)")]
    UnsupportedPixelFormat {
        /// The pixel-format flags that were read.
        flags: u32,
    },

    /// The compression tag is not the one supported block format.
    #[error("unsupported compression {} ({found:#010x})", fourcc_name(.found))]
    UnsupportedCompression {
        /// The fourCC that was read.
        found: u32,
    },

    /// The buffer ends before the header or the block payload does.
    #[error("truncated data: need {needed} bytes, have {available}")]
    Truncated {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// The declared dimensions imply a buffer too large to address.
    #[error("image dimensions {width}x{height} are too large")]
    ImageTooLarge {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
}

/// Render a fourCC as its four ASCII characters, or `????` when any byte is
/// not printable.
#[must_use]
pub fn fourcc_display(code: u32) -> String {
    let bytes = code.to_le_bytes();
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        bytes.iter().map(|&b| char::from(b)).collect()
    } else {
        "????".to_string()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn fourcc_name(code: &u32) -> String {
    fourcc_display(*code)
}
