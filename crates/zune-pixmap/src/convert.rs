/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion of pixmap rasters to RGBA8888
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use zune_core::bit_depth::BitDepth;
use zune_core::log::trace;

use crate::errors::ConversionErrors;
use crate::pixmap::Pixmap;

/// Scale `sample` from `0..=maxval` to `0..=255`
///
/// Rounds half to even and clamps, samples above maxval saturate at 255.
/// `maxval` must be non zero.
#[inline(always)]
fn scale(sample: u32, maxval: u32) -> u8 {
    let numerator = sample * 255;
    let quotient = numerator / maxval;
    let remainder = numerator % maxval;

    let rounded = match (remainder * 2).cmp(&maxval) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1)
    };
    rounded.min(255) as u8
}

fn convert_eight_bit(data: &[u8], output: &mut [u8], maxval: u32) {
    let mut table = [0_u8; 256];

    for (sample, value) in table.iter_mut().enumerate() {
        *value = scale(sample as u32, maxval);
    }
    let mut input = data.chunks_exact(3);

    for pixel in output.chunks_exact_mut(4) {
        match input.next() {
            Some(rgb) => {
                pixel[0] = table[usize::from(rgb[0])];
                pixel[1] = table[usize::from(rgb[1])];
                pixel[2] = table[usize::from(rgb[2])];
            }
            None => pixel[..3].fill(0)
        }
        pixel[3] = 255;
    }
}

fn convert_sixteen_bit(data: &[u8], output: &mut [u8], maxval: u32) {
    let mut input = data.chunks_exact(6);

    for pixel in output.chunks_exact_mut(4) {
        match input.next() {
            Some(rgb) => {
                for (channel, sample) in pixel[..3].iter_mut().zip(rgb.chunks_exact(2)) {
                    let value = u16::from_be_bytes([sample[0], sample[1]]);
                    *channel = scale(u32::from(value), maxval);
                }
            }
            None => pixel[..3].fill(0)
        }
        pixel[3] = 255;
    }
}

impl Pixmap<'_> {
    /// Convert the raster to a newly allocated RGBA8888 buffer
    ///
    /// The returned buffer is exactly [`rgba8888_len`](Self::rgba8888_len)
    /// bytes long, see [`to_rgba8888_into`](Self::to_rgba8888_into) for
    /// how samples are scaled.
    ///
    /// # Panics
    /// If the output cannot be allocated, which can only happen for
    /// pixmaps built with [`new`](Self::new) whose dimensions do not
    /// match any real buffer. Use
    /// [`to_rgba8888_into`](Self::to_rgba8888_into) to avoid this.
    pub fn to_rgba8888(&self) -> Vec<u8> {
        let mut output = vec![0; self.rgba8888_len()];

        self.write_rgba8888(&mut output);

        output
    }

    /// Convert the raster to RGBA8888, writing into `destination`
    ///
    /// Each channel becomes `round(sample * 255 / maxval)`, rounding half
    /// to even and clamping to 255, so samples larger than maxval
    /// saturate instead of wrapping. Alpha is always 255.
    ///
    /// `destination` may be larger than needed, only the first
    /// [`rgba8888_len`](Self::rgba8888_len) bytes are written.
    ///
    /// For pixmaps built with [`new`](Self::new), a maxval of zero acts like
    /// one and pixels missing from `data` come out opaque black.
    ///
    /// # Errors
    /// [`ConversionErrors::DestinationTooSmall`] if `destination` is too short,
    /// in which case nothing is written.
    pub fn to_rgba8888_into(&self, destination: &mut [u8]) -> Result<(), ConversionErrors> {
        let expected = self.rgba8888_len();

        if destination.len() < expected {
            return Err(ConversionErrors::DestinationTooSmall(
                expected,
                destination.len()
            ));
        }
        self.write_rgba8888(&mut destination[..expected]);

        Ok(())
    }

    fn write_rgba8888(&self, output: &mut [u8]) {
        let maxval = u32::from(self.maxval.max(1));

        trace!(
            "Converting {}x{} pixmap with maxval {} to RGBA8888",
            self.width,
            self.height,
            maxval
        );

        match self.bit_depth() {
            BitDepth::Eight => convert_eight_bit(self.data, output, maxval),
            _ => convert_sixteen_bit(self.data, output, maxval)
        }
    }
}
