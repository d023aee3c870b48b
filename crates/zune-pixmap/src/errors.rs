/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors returned while parsing and converting pixmaps
use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur while parsing a PPM buffer
///
/// Every header and validation failure is reported through this
/// one type, the variant names the cause.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PPMParseErrors {
    /// The buffer does not start with `P6` followed by whitespace
    BadMagic,
    /// The width field could not be lexed or does not fit in a `usize`
    MalformedWidth,
    /// The height field could not be lexed or does not fit in a `usize`
    MalformedHeight,
    /// The maxval field could not be lexed, was not terminated by
    /// a single carriage return or line feed, or does not fit in a `usize`
    MalformedMaxval,
    /// Width decoded to zero
    ZeroWidth,
    /// Height decoded to zero
    ZeroHeight,
    /// Maxval was zero or greater than 65535
    ///
    /// The argument is the decoded value
    MaxvalOutOfRange(usize),
    /// The buffer ends before the raster does
    ///
    /// # Arguments
    /// - 1st argument is the number of raster bytes required
    /// - 2nd argument is the number of bytes left after the header
    TruncatedFile(usize, usize),
    /// A dimension is larger than what the decoder options allow
    TooLargeDimensions {
        dimension: &'static str,
        limit:     usize,
        found:     usize
    }
}

impl Debug for PPMParseErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PPMParseErrors::BadMagic => writeln!(f, "PPM parse error: bad magic"),
            PPMParseErrors::MalformedWidth => writeln!(f, "PPM parse error: malformed width"),
            PPMParseErrors::MalformedHeight => writeln!(f, "PPM parse error: malformed height"),
            PPMParseErrors::MalformedMaxval => writeln!(f, "PPM parse error: malformed maxval"),
            PPMParseErrors::ZeroWidth => writeln!(f, "PPM parse error: width is zero"),
            PPMParseErrors::ZeroHeight => writeln!(f, "PPM parse error: height is zero"),
            PPMParseErrors::MaxvalOutOfRange(value) => {
                writeln!(f, "PPM parse error: maxval out of range: {value}")
            }
            PPMParseErrors::TruncatedFile(expected, found) => {
                writeln!(
                    f,
                    "PPM parse error: truncated file, raster needs {expected} bytes but only {found} remain"
                )
            }
            PPMParseErrors::TooLargeDimensions {
                dimension,
                limit,
                found
            } => {
                writeln!(
                    f,
                    "PPM parse error: {dimension} {found} is greater than the configured limit {limit}"
                )
            }
        }
    }
}

impl Display for PPMParseErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PPMParseErrors {}

/// Errors encountered when converting a pixmap to another layout
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ConversionErrors {
    /// The caller supplied destination cannot hold the output
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes needed
    /// - 2nd argument is the length of the destination
    DestinationTooSmall(usize, usize)
}

impl Debug for ConversionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ConversionErrors::DestinationTooSmall(expected, found) => {
                writeln!(
                    f,
                    "Destination too small, expected at least {expected} bytes but found {found}"
                )
            }
        }
    }
}

impl Display for ConversionErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionErrors {}
