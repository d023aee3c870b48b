/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A zero copy parser for binary Portable Pixmaps (P6)
//!
//! [Format Specification](http://netpbm.sourceforge.net/doc/ppm.html)
//!
//! ```text
//! P6 <width> <height> <maxval>\n<raster>
//! ```
//! The header is ASCII, fields are separated by whitespace and may carry
//! `#` comments (even in the middle of a number). The raster follows a
//! single carriage return or line feed after maxval and holds three samples
//! per pixel, one byte each when maxval is below 256 and two big endian
//! bytes otherwise.
//!
//! Parsing borrows the raster from the input buffer, nothing is copied
//! until the image is converted to RGBA8888.
//!
//! # Example
//! ```
//! use zune_pixmap::Pixmap;
//!
//! let image = Pixmap::parse(b"P6 1 1 15\n\x0f\x00\xc8").unwrap();
//! assert_eq!(image.to_rgba8888(), [255, 0, 255, 255]);
//! ```
//!
//! # Features
//! - `std`: implements `std::error::Error` for the error types
//! - `log`: emits parsing traces through the `log` crate
//!
//! ## `no_std`
//! Without the `std` feature the crate is `no_std` and needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use errors::*;
pub use header::{parse_header, Header, MAX_HEADER_LENGTH};
pub use pixmap::*;
pub use zune_core;

mod convert;
mod errors;
mod header;
mod pixmap;
