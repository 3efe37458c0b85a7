/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A BMP to ASCII mask decoder
//!
//! This crate reads uncompressed 24 and 32 bit BMP images whose pixels are
//! all exactly black or exactly white and decodes them into a [`Mask`], a
//! top-down grid of classified cells that renders as text, `'1'` per black
//! pixel and `'0'` per white pixel.
//!
//! Decoding is pure, nothing here touches the console. A caller renders the
//! mask into any [`Write`](std::io::Write) sink via [`Mask::write_ascii`].
//!
//! # Supported formats
//! - 24 bit uncompressed BMP
//! - 32 bit uncompressed BMP (alpha byte read and ignored)
//!
//! # Unsupported formats
//! - Palette-indexed, 16 bit, RLE and bitfield variants
//! - Top-down (negative height) images
//! - Any pixel that is neither `#000000` nor `#FFFFFF` is an error, the
//!   decoder only accepts monochrome content
//!
//! # Usage
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use stencil_bmp::MaskDecoder;
//!
//! fn main() -> Result<(), stencil_bmp::MaskDecoderErrors> {
//!     let source = BufReader::new(File::open("glyph.bmp")?);
//!     let mut decoder = MaskDecoder::new(source);
//!     let mask = decoder.decode()?;
//!     mask.write_ascii(&mut std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

pub use crate::common::{BmpCompression, BmpFileHeader, BmpInfoHeader, MaskPixel};
pub use crate::decoder::{probe_bmp, MaskDecoder};
pub use crate::errors::MaskDecoderErrors;
pub use crate::mask::Mask;
pub use crate::options::DecoderOptions;

mod bytestream;
mod common;
mod decoder;
mod errors;
mod mask;
mod options;
