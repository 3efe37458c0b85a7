/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use crate::common::BmpCompression;

/// Errors that can occur while decoding a BMP mask
#[non_exhaustive]
pub enum MaskDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The info header size is not one this decoder understands
    UnsupportedHeader(u32),
    /// Bit depth other than 24 or 32
    UnsupportedDepth(u16),
    /// The pixel data is compressed
    UnsupportedCompression(BmpCompression),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A pixel that is neither exactly black nor exactly white,
    /// coordinates are in output order with `y = 0` the top row
    InvalidColor { x: usize, y: usize, color: u32 },
    /// A calculation overflowed
    OverFlowOccurred,
    /// Generic message
    GenericStatic(&'static str),
    IoErrors(std::io::Error),
}

impl Debug for MaskDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                write!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::UnsupportedHeader(size) => {
                write!(
                    f,
                    "Unsupported info header size {size}, expected a Windows info header"
                )
            }
            Self::UnsupportedDepth(depth) => {
                write!(
                    f,
                    "Unsupported bit depth {depth}, only 24 and 32 bit images are supported"
                )
            }
            Self::UnsupportedCompression(comp) => {
                write!(
                    f,
                    "{comp:?} compressed pixel data is not supported, only uncompressed RGB"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                write!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::InvalidColor { x, y, color } => {
                write!(
                    f,
                    "Pixel at ({x}, {y}) has color #{color:06X}, expected #000000 or #FFFFFF"
                )
            }
            Self::OverFlowOccurred => {
                write!(f, "Overflow occurred")
            }
            Self::GenericStatic(message) => {
                write!(f, "{message}")
            }
            Self::IoErrors(err) => {
                write!(f, "I/O error: {err}")
            }
        }
    }
}

impl From<std::io::Error> for MaskDecoderErrors {
    fn from(value: std::io::Error) -> Self {
        MaskDecoderErrors::IoErrors(value)
    }
}
