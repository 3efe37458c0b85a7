/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// The format this decoder accepts is the plain Windows flavor of BMP:
//
// - A 14 byte file header: the magic number ("BM"), file size, two
//   reserved fields and the offset to the pixel data.
// - An info header of 40 bytes (BITMAPINFOHEADER) or one of its larger
//   v4/v5 revisions, carrying width, height, planes, bits-per-pixel and
//   the compression type. Whatever the revision adds past the
//   compression field is irrelevant to 24/32 bit uncompressed images,
//   so it is skipped by seeking straight to the pixel data offset.
// - Pixel rows stored bottom-up, each padded to a 4 byte boundary,
//   each pixel stored as B,G,R or B,G,R,A.
//
// Legacy OS/2 headers (12 and 16 bytes) store 16 bit dimensions and are
// rejected rather than guessed at.

use std::io::{Read, Seek};

use log::trace;

use crate::bytestream::ByteReader;
use crate::common::{BmpCompression, BmpFileHeader, BmpInfoHeader, MaskPixel};
use crate::errors::MaskDecoderErrors;
use crate::mask::Mask;
use crate::options::DecoderOptions;

/// Size of the file header preceding the info header, signature included.
const FILE_HEADER_SIZE: u32 = 14;

/// Info header sizes this decoder understands.
const INFO_HEADER_SIZES: [u32; 6] = [40, 52, 56, 64, 108, 124];

/// Probe some bytes to see
/// if they begin a BMP image this decoder can handle
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read sz
            if let Some(sz) = bytes.get(14) {
                return INFO_HEADER_SIZES.contains(&u32::from(*sz));
            }
        }
    }
    false
}

/// A BMP mask decoder.
///
/// Reads an uncompressed 24 or 32 bit BMP image whose pixels are all
/// exactly black or exactly white and produces a [`Mask`] in visual
/// (top-down) row order.
///
/// ## Extracting image metadata
/// - use `decode_headers` + accessors to get information
/// ```no_run
/// use std::io::Cursor;
///
/// use stencil_bmp::MaskDecoder;
///
/// fn main() -> Result<(), stencil_bmp::MaskDecoderErrors> {
///     let source = Cursor::new(std::fs::read("glyph.bmp")?);
///     let mut decoder = MaskDecoder::new(source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     // unwrap won't panic
///     let (w, h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}", w, h);
///
///     Ok(())
/// }
/// ```
///
/// ## Just getting the mask
///
/// ```no_run
/// use std::io::Cursor;
///
/// use stencil_bmp::MaskDecoder;
///
/// fn main() -> Result<(), stencil_bmp::MaskDecoderErrors> {
///     let source = Cursor::new(std::fs::read("glyph.bmp")?);
///     let mut decoder = MaskDecoder::new(source);
///     let mask = decoder.decode()?;
///     println!("Mask dimensions: {:?}", mask.dimensions());
///     Ok(())
/// }
/// ```
pub struct MaskDecoder<T>
where
    T: Read + Seek,
{
    bytes: ByteReader<T>,
    options: DecoderOptions,
    file_header: BmpFileHeader,
    info_header: BmpInfoHeader,
    width: usize,
    height: usize,
    decoded_headers: bool,
}

impl<T> MaskDecoder<T>
where
    T: Read + Seek,
{
    /// Create a new mask decoder that reads data from
    /// `source`
    ///
    /// # Arguments
    /// - `source`: The byte source from which we will read the image
    ///
    /// # Returns
    /// - A mask decoder instance
    pub fn new(source: T) -> MaskDecoder<T> {
        MaskDecoder::new_with_options(source, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `source`: The byte source from which we will read the image
    /// * `options`: Specialized options for this decoder
    ///
    /// returns: A mask decoder instance
    pub fn new_with_options(source: T, options: DecoderOptions) -> MaskDecoder<T> {
        MaskDecoder {
            bytes: ByteReader::new(source),
            options,
            file_header: BmpFileHeader::default(),
            info_header: BmpInfoHeader::default(),
            width: 0,
            height: 0,
            decoded_headers: false,
        }
    }

    /// Decode the file and info headers and store
    /// the parsed values in the decode context
    ///
    /// After calling this, image metadata (dimensions, depth, headers)
    /// is available via the accessors
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), MaskDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        let mut magic = [0_u8; 2];
        self.bytes.read_exact_bytes(&mut magic)?;

        if &magic != b"BM" {
            return Err(MaskDecoderErrors::InvalidMagicBytes);
        }
        let file_size = self.bytes.read_u32_le()?;
        // 4 reserved bytes nobody assigns meaning to
        self.bytes.skip(4)?;
        let pixel_offset = self.bytes.read_u32_le()?;

        let header_size = self.bytes.read_u32_le()?;

        if !INFO_HEADER_SIZES.contains(&header_size) {
            return Err(MaskDecoderErrors::UnsupportedHeader(header_size));
        }
        if pixel_offset < FILE_HEADER_SIZE + header_size {
            return Err(MaskDecoderErrors::GenericStatic(
                "Pixel data offset points inside the headers",
            ));
        }

        let width = self.bytes.read_u32_le()? as i32;
        let height = self.bytes.read_u32_le()? as i32;

        if width <= 0 {
            return Err(MaskDecoderErrors::GenericStatic(
                "Width is zero or negative, invalid image",
            ));
        }
        if height == 0 {
            return Err(MaskDecoderErrors::GenericStatic(
                "Height is zero, invalid image",
            ));
        }
        if height < 0 {
            // negative height marks top-down row order
            return Err(MaskDecoderErrors::GenericStatic(
                "Top-down pixel storage is not supported",
            ));
        }

        self.width = width.unsigned_abs() as usize;
        self.height = height.unsigned_abs() as usize;

        if self.width > self.options.max_width() {
            return Err(MaskDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width,
            ));
        }
        if self.height > self.options.max_height() {
            return Err(MaskDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height,
            ));
        }

        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);

        let planes = self.bytes.read_u16_le()?;

        if planes != 1 {
            return Err(MaskDecoderErrors::GenericStatic(
                "Invalid BMP header, planes must be 1",
            ));
        }

        let depth = self.bytes.read_u16_le()?;

        if depth != 24 && depth != 32 {
            return Err(MaskDecoderErrors::UnsupportedDepth(depth));
        }

        let compression = BmpCompression::from_u32(self.bytes.read_u32_le()?);

        if compression != BmpCompression::RGB {
            return Err(MaskDecoderErrors::UnsupportedCompression(compression));
        }

        trace!("Bit depth: {}", depth);
        trace!("Compression: {:?}", compression);
        trace!("Pixel data offset: {}", pixel_offset);

        self.file_header = BmpFileHeader {
            file_size,
            pixel_offset,
        };
        self.info_header = BmpInfoHeader {
            header_size,
            width,
            height,
            planes,
            depth,
            compression,
        };
        self.decoded_headers = true;

        Ok(())
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// # Returns
    /// - `Some((width,height))` - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }

    /// Bit depth of the image, 24 or 32, or `None` if the headers
    /// weren't decoded
    pub const fn depth(&self) -> Option<u16> {
        if !self.decoded_headers {
            return None;
        }
        Some(self.info_header.depth)
    }

    /// The raw file and info headers as parsed from the source, or
    /// `None` if the headers weren't decoded
    pub const fn headers(&self) -> Option<(BmpFileHeader, BmpInfoHeader)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.file_header, self.info_header))
    }

    /// Decode the image, classify every pixel and return the mask
    /// or an error if decoding could not be completed
    ///
    /// The pixel buffer is read in one exact-sized pass, a stream shorter
    /// than `row_stride * height` pixel bytes is an I/O error. A pixel
    /// that is neither exactly black nor exactly white fails the whole
    /// decode, no partial mask is returned.
    pub fn decode(&mut self) -> Result<Mask, MaskDecoderErrors> {
        self.decode_headers()?;

        let depth = usize::from(self.info_header.depth);
        let bytes_per_pixel = depth / 8;

        // bmp rounds each row up to a multiple of 4 bytes, padding the
        // end if necessary
        let row_stride = ((self.width * depth + 31) / 8) & !3;

        let buffer_size = row_stride
            .checked_mul(self.height)
            .ok_or(MaskDecoderErrors::OverFlowOccurred)?;

        let mut buffer = vec![0_u8; buffer_size];

        self.bytes
            .set_position(u64::from(self.file_header.pixel_offset))?;
        self.bytes.read_exact_bytes(&mut buffer)?;

        let mut cells = Vec::with_capacity(self.width * self.height);

        // BMP format writes from bottom to top, meaning the first row in
        // the stream is the last strip of the image, so iterating the
        // buffer back to front restores visual order. The first row
        // classified below is the top row of the output, which also makes
        // `InvalidColor` report the first bad pixel in output order.
        for (y, row) in buffer.rchunks_exact(row_stride).enumerate() {
            for (x, pixel) in row
                .chunks_exact(bytes_per_pixel)
                .take(self.width)
                .enumerate()
            {
                // stored byte order within a pixel is b,g,r, plus an
                // alpha byte on 32 bit images which is ignored
                let color = u32::from(pixel[2]) << 16
                    | u32::from(pixel[1]) << 8
                    | u32::from(pixel[0]);

                match color {
                    0x000000 => cells.push(MaskPixel::Black),
                    0xFFFFFF => cells.push(MaskPixel::White),
                    _ => return Err(MaskDecoderErrors::InvalidColor { x, y, color }),
                }
            }
        }

        Ok(Mask::new(self.width, self.height, cells))
    }
}
