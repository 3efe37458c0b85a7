/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The parsed 14 byte BMP file header, signature excluded.
#[derive(Copy, Clone, Default, Debug)]
pub struct BmpFileHeader {
    /// Total file size as recorded in the header.
    ///
    /// Stored as parsed, the decoder does not cross-check it against the
    /// real stream length.
    pub file_size: u32,
    /// Byte offset from the start of the file to the first pixel byte.
    pub pixel_offset: u32,
}

/// The info header fields this decoder consumes.
///
/// Fields past the compression type (resolution, color counts, masks) are
/// never read, the decoder seeks straight to the pixel data instead.
#[derive(Copy, Clone, Default, Debug)]
pub struct BmpInfoHeader {
    /// Size of the info header itself, identifies the header revision.
    pub header_size: u32,
    /// Image width in pixels, signed as the format stores it.
    pub width: i32,
    /// Image height in pixels. Positive means bottom-up row storage.
    pub height: i32,
    /// Number of color planes, 1 in any well formed file.
    pub planes: u16,
    /// Bits per pixel.
    pub depth: u16,
    /// Compression scheme of the pixel data.
    pub compression: BmpCompression,
}

/// BMP pixel data compression schemes.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    #[default]
    Unknown,
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> BmpCompression {
        match num {
            0 => BmpCompression::RGB,
            1 => BmpCompression::RLE8,
            2 => BmpCompression::RLE4,
            3 => BmpCompression::BITFIELDS,
            _ => BmpCompression::Unknown,
        }
    }
}

/// Classification of a single mask cell.
///
/// Every pixel of an accepted image is exactly one of these, any other
/// color fails the decode.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MaskPixel {
    Black,
    White,
}

impl MaskPixel {
    /// The character this cell renders as, `'1'` for black and `'0'`
    /// for white.
    pub const fn glyph(self) -> u8 {
        match self {
            MaskPixel::Black => b'1',
            MaskPixel::White => b'0',
        }
    }
}
