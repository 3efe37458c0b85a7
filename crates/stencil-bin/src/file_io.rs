/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;

use log::debug;
use stencil_bmp::{DecoderOptions, Mask, MaskDecoder, MaskDecoderErrors};

/// Open `file_path` and decode it into a mask.
///
/// The file handle is dropped when decoding finishes, whichever way it
/// finishes.
pub fn decode_file(file_path: &OsStr, options: DecoderOptions) -> Result<Mask, MaskDecoderErrors> {
    debug!("Reading {:?}", file_path);

    let fd = BufReader::new(File::open(file_path)?);

    MaskDecoder::new_with_options(fd, options).decode()
}
