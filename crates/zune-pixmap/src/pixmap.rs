/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::log::info;
use zune_core::options::DecoderOptions;

use crate::errors::PPMParseErrors;
use crate::header::{bit_depth_for, parse_header, Header};

/// A binary (P6) Portable Pixmap
///
/// `data` is the raw raster, three channels per pixel in row-major
/// order, each channel one byte when `maxval < 256` and two big endian
/// bytes otherwise.
///
/// The raster is never copied out of the parsed buffer, `data` borrows
/// it for `'a`. The buffer cannot be changed while the pixmap is alive,
/// but any change made afterwards is seen by pixmaps later parsed or
/// built over it.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Pixmap<'a> {
    pub width:  usize,
    pub height: usize,
    pub maxval: u16,
    pub data:   &'a [u8]
}

impl<'a> Pixmap<'a> {
    /// Create a pixmap directly from its fields
    ///
    /// Nothing is validated, callers are responsible for `data` holding
    /// `width * height * 3` samples and for `maxval` being non zero.
    /// Converting an inconsistent pixmap with
    /// [`to_rgba8888_into`](Self::to_rgba8888_into) does not panic,
    /// [`to_rgba8888`](Self::to_rgba8888) only panics if its output
    /// cannot be allocated.
    pub const fn new(width: usize, height: usize, maxval: u16, data: &'a [u8]) -> Pixmap<'a> {
        Pixmap {
            width,
            height,
            maxval,
            data
        }
    }

    /// Parse a P6 encoded buffer
    ///
    /// # Example
    /// ```
    /// use zune_pixmap::Pixmap;
    ///
    /// let image = Pixmap::parse(b"P6 1 1 255\n\x12\x34\x56").unwrap();
    ///
    /// assert_eq!(image.dimensions(), (1, 1));
    /// assert_eq!(image.data, &[0x12, 0x34, 0x56]);
    /// assert!(Pixmap::parse(b"NOT VALID PPM").is_err());
    /// ```
    pub fn parse(buffer: &'a [u8]) -> Result<Pixmap<'a>, PPMParseErrors> {
        Self::parse_inner(buffer, None)
    }

    /// Parse a P6 encoded buffer, rejecting images larger than
    /// the width and height limits of `options`
    ///
    /// # Example
    /// ```
    /// use zune_pixmap::zune_core::options::DecoderOptions;
    /// use zune_pixmap::{Pixmap, PPMParseErrors};
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let result = Pixmap::parse_with_options(b"P6 2 1 255\n\0\0\0\0\0\0", options);
    ///
    /// assert!(matches!(result, Err(PPMParseErrors::TooLargeDimensions { .. })));
    /// ```
    pub fn parse_with_options(
        buffer: &'a [u8], options: DecoderOptions
    ) -> Result<Pixmap<'a>, PPMParseErrors> {
        Self::parse_inner(buffer, Some(&options))
    }

    fn parse_inner(
        buffer: &'a [u8], options: Option<&DecoderOptions>
    ) -> Result<Pixmap<'a>, PPMParseErrors> {
        let header = parse_header(buffer)?;

        if let Some(options) = options {
            check_limits(&header, options)?;
        }
        // the header window lies within the buffer
        let remaining = buffer.len() - header.raster_start;

        let size = match header.raster_len() {
            Some(size) if size <= remaining => size,
            size => {
                return Err(PPMParseErrors::TruncatedFile(
                    size.unwrap_or(usize::MAX),
                    remaining
                ))
            }
        };
        let raster_end = header.raster_start + size;

        info!(
            "Parsed {}x{} pixmap, maxval {}",
            header.width, header.height, header.maxval
        );

        Ok(Pixmap {
            width:  header.width,
            height: header.height,
            maxval: header.maxval,
            data:   &buffer[header.raster_start..raster_end]
        })
    }

    /// Return the image width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the sample depth of the raster
    ///
    /// This depends only on maxval, any maxval above 255 is
    /// [`BitDepth::Sixteen`] regardless of how many bits it needs.
    pub const fn bit_depth(&self) -> BitDepth {
        bit_depth_for(self.maxval)
    }

    /// Return the raster colorspace, always RGB
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGB
    }

    /// Number of bytes needed to hold this image as RGBA8888
    ///
    /// Saturates at `usize::MAX` for dimensions that overflow.
    pub fn rgba8888_len(&self) -> usize {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(ColorSpace::RGBA.num_components())
    }
}

fn check_limits(header: &Header, options: &DecoderOptions) -> Result<(), PPMParseErrors> {
    if header.width > options.get_max_width() {
        return Err(PPMParseErrors::TooLargeDimensions {
            dimension: "width",
            limit:     options.get_max_width(),
            found:     header.width
        });
    }
    if header.height > options.get_max_height() {
        return Err(PPMParseErrors::TooLargeDimensions {
            dimension: "height",
            limit:     options.get_max_height(),
            found:     header.height
        });
    }
    Ok(())
}

impl Debug for Pixmap<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("maxval", &self.maxval)
            .field("data_len", &self.data.len())
            .finish()
    }
}
