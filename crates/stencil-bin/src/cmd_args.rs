/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("stencil")
        .about("Render a monochrome BMP image as an ASCII mask, '1' per black pixel and '0' per white pixel")
        .arg(Arg::new("file")
            .help("Input BMP file to render")
            .value_parser(value_parser!(OsString))
            .required(true))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .value_parser(value_parser!(usize))
            .default_value("16384")
            .help("Maximum image width the decoder accepts"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .value_parser(value_parser!(usize))
            .default_value("16384")
            .help("Maximum image height the decoder accepts"))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::create_cmd_args;

    #[test]
    fn test_missing_file_argument_is_rejected() {
        let result = create_cmd_args().try_get_matches_from(["stencil"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_extra_file_argument_is_rejected() {
        let result = create_cmd_args().try_get_matches_from(["stencil", "a.bmp", "b.bmp"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_single_file_argument_is_accepted() {
        let matches = create_cmd_args()
            .try_get_matches_from(["stencil", "glyph.bmp"])
            .unwrap();

        assert_eq!(
            matches.get_one::<OsString>("file"),
            Some(&OsString::from("glyph.bmp"))
        );
    }
}
