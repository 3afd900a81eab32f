//! Integration tests for container parsing and block decoding.

use swgui_codec::header::{FOURCC_DXT1, HEADER_LEN, MAGIC, PIXEL_FORMAT_FOURCC};
use swgui_codec::{
    Bc1Decoder, CodecError, ContainerHeader, TextureDecoder, decode, decode_blocks, is_container,
    parse_header,
};

const RED: u16 = 0xF800;
const BLUE: u16 = 0x001F;

/// Helper: a 128-byte header with the given dimensions and format fields.
fn header_bytes(width: u32, height: u32, pixel_format_flags: u32, four_cc: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_LEN];
    bytes[0..4].copy_from_slice(&MAGIC.to_le_bytes());
    bytes[4..8].copy_from_slice(&124u32.to_le_bytes());
    bytes[12..16].copy_from_slice(&height.to_le_bytes());
    bytes[16..20].copy_from_slice(&width.to_le_bytes());
    bytes[28..32].copy_from_slice(&1u32.to_le_bytes());
    bytes[80..84].copy_from_slice(&pixel_format_flags.to_le_bytes());
    bytes[84..88].copy_from_slice(&four_cc.to_le_bytes());
    bytes
}

/// Helper: one 8-byte block.
fn block(c0: u16, c1: u16, indices: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8);
    bytes.extend_from_slice(&c0.to_le_bytes());
    bytes.extend_from_slice(&c1.to_le_bytes());
    bytes.extend_from_slice(&indices.to_le_bytes());
    bytes
}

/// Helper: a complete DXT1 container.
fn container(width: u32, height: u32, blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = header_bytes(width, height, PIXEL_FORMAT_FOURCC, FOURCC_DXT1);
    for b in blocks {
        bytes.extend_from_slice(b);
    }
    bytes
}

/// Index table with `index` at pixel `(px, py)` and 0 elsewhere.
const fn single_index(px: u32, py: u32, index: u32) -> u32 {
    index << (2 * (py * 4 + px))
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

#[test]
fn test_parse_header_reads_fields() {
    let bytes = header_bytes(640, 480, PIXEL_FORMAT_FOURCC, FOURCC_DXT1);
    let header = parse_header(&bytes).unwrap();

    assert_eq!(header.magic, MAGIC);
    assert_eq!(header.header_size, 124);
    assert_eq!(header.width, 640);
    assert_eq!(header.height, 480);
    assert_eq!(header.mip_map_count, 1);
    assert_eq!(header.four_cc, FOURCC_DXT1);
    assert_eq!(header.blocks_wide(), 160);
    assert_eq!(header.blocks_high(), 120);
    assert_eq!(header.payload_len().unwrap(), 160 * 120 * 8);
}

#[test]
fn test_parse_header_bad_magic() {
    let mut bytes = header_bytes(4, 4, PIXEL_FORMAT_FOURCC, FOURCC_DXT1);
    bytes[0..4].copy_from_slice(b"\x89PNG");

    assert_eq!(
        parse_header(&bytes),
        Err(CodecError::BadMagic {
            found: u32::from_le_bytes(*b"\x89PNG"),
            expected: MAGIC,
        })
    );
}

#[test]
fn test_parse_header_checks_magic_before_pixel_format() {
    let mut bytes = header_bytes(4, 4, 0, 0);
    bytes[0] = b'X';
    assert!(matches!(parse_header(&bytes), Err(CodecError::BadMagic { .. })));
}

#[test]
fn test_parse_header_uncompressed_pixel_format() {
    let bytes = header_bytes(4, 4, 0x40, FOURCC_DXT1);
    assert_eq!(
        parse_header(&bytes),
        Err(CodecError::UnsupportedPixelFormat { flags: 0x40 })
    );
}

#[test]
fn test_parse_header_other_compression() {
    let dxt5 = u32::from_le_bytes(*b"DXT5");
    let bytes = header_bytes(4, 4, PIXEL_FORMAT_FOURCC, dxt5);

    let err = parse_header(&bytes).unwrap_err();
    assert_eq!(err, CodecError::UnsupportedCompression { found: dxt5 });
    assert!(err.to_string().contains("DXT5"));
}

#[test]
fn test_parse_header_short_buffer() {
    assert_eq!(
        parse_header(&MAGIC.to_le_bytes()),
        Err(CodecError::Truncated {
            needed: HEADER_LEN,
            available: 4,
        })
    );
    assert!(matches!(
        parse_header(&[]),
        Err(CodecError::Truncated { available: 0, .. })
    ));
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

#[test]
fn test_decode_single_red_block() {
    let bytes = container(4, 4, &[block(RED, BLUE, 0)]);

    let image = decode(&bytes).unwrap();

    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 4);
    assert_eq!(image.pixels().len(), 4 * 4 * 4);
    for chunk in image.pixels().chunks_exact(4) {
        assert_eq!(chunk, &[255, 0, 0, 255]);
    }
}

#[test]
fn test_decode_transparent_index_in_alpha_mode() {
    // c0 < c1 selects the three-color + transparent palette.
    let bytes = container(4, 4, &[block(BLUE, RED, single_index(2, 1, 3))]);

    let image = decode(&bytes).unwrap();

    assert_eq!(image.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(image.pixel(0, 0), Some([0, 0, 255, 255]));
}

#[test]
fn test_header_only_buffer_is_truncated_at_decode() {
    let bytes = header_bytes(4, 4, PIXEL_FORMAT_FOURCC, FOURCC_DXT1);

    let header = parse_header(&bytes).unwrap();
    assert_eq!(
        decode_blocks(&header, header.payload(&bytes)),
        Err(CodecError::Truncated {
            needed: 8,
            available: 0,
        })
    );
    assert!(matches!(decode(&bytes), Err(CodecError::Truncated { .. })));
}

#[test]
fn test_partial_payload_is_truncated() {
    let mut bytes = container(8, 4, &[block(RED, BLUE, 0)]);
    bytes.extend_from_slice(&[0, 0, 0]);

    assert_eq!(
        decode(&bytes),
        Err(CodecError::Truncated {
            needed: 16,
            available: 11,
        })
    );
}

#[test]
fn test_opaque_mode_palette_is_fully_opaque() {
    // c0 > c1: every index, including 3, is opaque.
    let indices = (0..16u32).fold(0, |acc, i| acc | ((i % 4) << (2 * i)));
    let bytes = container(4, 4, &[block(0xFFFF, 0x0000, indices)]);

    let image = decode(&bytes).unwrap();

    assert_eq!(image.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(image.pixel(1, 0), Some([0, 0, 0, 255]));
    assert_eq!(image.pixel(2, 0), Some([170, 170, 170, 255]));
    assert_eq!(image.pixel(3, 0), Some([85, 85, 85, 255]));
    assert!(image.pixels().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn test_equal_endpoints_use_alpha_mode() {
    let bytes = container(4, 4, &[block(RED, RED, single_index(0, 0, 2) | single_index(1, 0, 3))]);

    let image = decode(&bytes).unwrap();

    assert_eq!(image.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(image.pixel(1, 0), Some([0, 0, 0, 0]));
}

#[test]
fn test_index_bit_layout_is_row_major() {
    // Index 1 (c1) only at (3, 2); everything else is c0.
    let bytes = container(4, 4, &[block(RED, BLUE, single_index(3, 2, 1))]);

    let image = decode(&bytes).unwrap();

    for y in 0..4 {
        for x in 0..4 {
            let expected = if (x, y) == (3, 2) {
                [0, 0, 255, 255]
            } else {
                [255, 0, 0, 255]
            };
            assert_eq!(image.pixel(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_blocks_are_placed_row_major() {
    // 8x8 image: blocks (0,0)=red, (1,0)=blue, (0,1)=white, (1,1)=black.
    let bytes = container(
        8,
        8,
        &[
            block(RED, BLUE, 0),
            block(BLUE, RED, 0),
            block(0xFFFF, 0, 0),
            block(0, 0xFFFF, 0),
        ],
    );

    let image = decode(&bytes).unwrap();

    assert_eq!(image.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(image.pixel(7, 3), Some([0, 0, 255, 255]));
    assert_eq!(image.pixel(3, 4), Some([255, 255, 255, 255]));
    assert_eq!(image.pixel(4, 7), Some([0, 0, 0, 255]));
}

#[test]
fn test_edge_blocks_are_clipped() {
    // 6x6 needs 2x2 blocks; each block paints a distinct opaque color so
    // every in-bounds pixel is written.
    let header = ContainerHeader {
        magic: MAGIC,
        header_size: 124,
        flags: 0,
        height: 6,
        width: 6,
        mip_map_count: 1,
        pixel_format_flags: PIXEL_FORMAT_FOURCC,
        four_cc: FOURCC_DXT1,
    };
    assert_eq!(header.blocks_wide(), 2);
    assert_eq!(header.blocks_high(), 2);

    let payload: Vec<u8> = [RED, BLUE, 0x07E0, 0xFFFF]
        .iter()
        .flat_map(|&c| block(c, 0, 0))
        .collect();

    let image = decode_blocks(&header, &payload).unwrap();

    assert_eq!(image.pixels().len(), 36 * 4);
    assert!(image.pixels().chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(image.pixel(5, 0), Some([0, 0, 255, 255]));
    assert_eq!(image.pixel(0, 5), Some([0, 255, 0, 255]));
    assert_eq!(image.pixel(5, 5), Some([255, 255, 255, 255]));
    assert_eq!(image.pixel(6, 0), None);
}

#[test]
fn test_trailing_mip_levels_are_ignored() {
    let bytes = container(4, 4, &[block(RED, BLUE, 0), block(BLUE, RED, 0)]);
    let image = decode(&bytes).unwrap();
    assert_eq!(image.pixel(0, 0), Some([255, 0, 0, 255]));
}

#[test]
fn test_zero_sized_image_decodes_empty() {
    let bytes = container(0, 0, &[]);
    let image = decode(&bytes).unwrap();
    assert_eq!(image.width(), 0);
    assert!(image.pixels().is_empty());
}

#[test]
fn test_decode_is_deterministic() {
    let bytes = container(
        8,
        4,
        &[block(0x1234, 0xABCD, 0xDEAD_BEEF), block(0xABCD, 0x1234, 0x0123_4567)],
    );
    let first = decode(&bytes).unwrap();
    for _ in 0..5 {
        assert_eq!(decode(&bytes).unwrap(), first);
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_is_container_sniffs_magic() {
    assert!(is_container(b"DDS \x7c\x00\x00\x00"));
    assert!(!is_container(b"DDS"));
    assert!(!is_container(b"\x89PNG\r\n"));
}

#[test]
fn test_bc1_decoder_trait() {
    let decoder = Bc1Decoder;
    let bytes = container(4, 4, &[block(RED, BLUE, 0)]);

    assert_eq!(decoder.name(), "DDS (DXT1)");
    assert!(decoder.supports(&bytes));
    assert_eq!(decoder.decode(&bytes).unwrap().pixel(3, 3), Some([255, 0, 0, 255]));
}
