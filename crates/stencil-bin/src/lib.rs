/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::process::exit;

use clap::error::ErrorKind;

mod cmd_args;
mod file_io;
mod global_options;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // clap exits with 2 on its own, the contract here is 1
                // for every failure
                let _ = err.print();
                exit(1);
            }
        },
    };

    global_options::setup_logger(&options);

    let decoder_options = global_options::parse_options(&options);

    let file = options.get_one::<OsString>("file").unwrap();

    let mask = match file_io::decode_file(file, decoder_options) {
        Ok(mask) => mask,
        Err(err) => {
            eprintln!(
                "stencil: could not render {}: {:?}",
                file.to_string_lossy(),
                err
            );
            exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    if let Err(err) = mask.write_ascii(&mut sink).and_then(|()| sink.flush()) {
        eprintln!("stencil: could not write mask: {err}");
        exit(1);
    }
}
