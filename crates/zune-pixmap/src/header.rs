/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! P6 header lexing
//!
//! Comments in a PPM header are odd. Anything from a `#` through the next
//! carriage return or line feed is ignored, and this holds even in the middle
//! of what looks like a token, so `1#comment\n2` is the number `12`.
//! The line ending that closes a comment is part of the comment, so it can
//! never act as the separator between two fields, nor as the single
//! byte that delimits the raster.
//!
//! The lexer walks a cursor over the header window and has three matching
//! routines, a run of whitespace and comments, a run of digits and comments,
//! and the field terminators.
use zune_core::bit_depth::BitDepth;
use zune_core::log::trace;

use crate::errors::PPMParseErrors;

/// Number of bytes at the start of a buffer that may hold the header.
///
/// The format itself has no such limit, but headers longer than this
/// only happen with very exotic comment use. A header that does not fit is
/// reported as a malformed field or bad magic.
pub const MAX_HEADER_LENGTH: usize = 4096;

/// A decoded and validated P6 header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// Image width, never zero
    pub width:        usize,
    /// Image height, never zero
    pub height:       usize,
    /// Largest sample value, in `1..=65535`
    pub maxval:       u16,
    /// Offset of the first raster byte in the parsed buffer
    pub raster_start: usize
}

impl Header {
    /// Bit depth implied by maxval
    ///
    /// Anything below 256 is stored as one byte per sample,
    /// the rest as two big endian bytes.
    pub const fn bit_depth(&self) -> BitDepth {
        bit_depth_for(self.maxval)
    }

    /// Number of raster bytes this header describes
    ///
    /// Returns `None` if the size does not fit in a `usize`
    pub fn raster_len(&self) -> Option<usize> {
        raster_len(self.width, self.height, self.maxval)
    }
}

pub(crate) const fn bit_depth_for(maxval: u16) -> BitDepth {
    if maxval < 256 {
        BitDepth::Eight
    } else {
        BitDepth::Sixteen
    }
}

pub(crate) fn raster_len(width: usize, height: usize, maxval: u16) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(3)?
        .checked_mul(bit_depth_for(maxval).size_of())
}

/// The raw header tokens, comments still embedded
#[derive(Debug)]
struct HeaderFields<'a> {
    width:        &'a [u8],
    height:       &'a [u8],
    maxval:       &'a [u8],
    raster_start: usize
}

/// Header whitespace, the C `isspace` set plus the latin1
/// no-break space (0xA0)
const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | 0xA0)
}

const fn is_line_end(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

struct HeaderLexer<'a> {
    window:   &'a [u8],
    position: usize
}

impl<'a> HeaderLexer<'a> {
    fn new(buffer: &'a [u8]) -> HeaderLexer<'a> {
        let end = buffer.len().min(MAX_HEADER_LENGTH);

        HeaderLexer {
            window:   &buffer[..end],
            position: 0
        }
    }

    fn peek(&self) -> Option<u8> {
        self.window.get(self.position).copied()
    }

    /// Position just past the comment starting at the cursor.
    ///
    /// Returns `None` when there is no `#` at the cursor or when
    /// the comment has no line ending inside the window.
    fn comment_end(&self) -> Option<usize> {
        if self.peek() != Some(b'#') {
            return None;
        }
        let body = &self.window[self.position + 1..];

        body.iter()
            .position(|&byte| is_line_end(byte))
            .map(|offset| self.position + 1 + offset + 1)
    }

    /// Skip any mix of whitespace and comments.
    ///
    /// Returns whether at least one whitespace byte was consumed.
    fn skip_separators(&mut self) -> bool {
        let mut saw_space = false;

        loop {
            match self.peek() {
                Some(byte) if is_space(byte) => {
                    self.position += 1;
                    saw_space = true;
                }
                Some(b'#') => match self.comment_end() {
                    Some(end) => self.position = end,
                    None => break
                },
                _ => break
            }
        }
        saw_space
    }

    /// Match a digit followed by any mix of digits and comments,
    /// returning the raw token text.
    fn digit_token(&mut self) -> Option<&'a [u8]> {
        let window = self.window;
        let start = self.position;

        if !self.peek()?.is_ascii_digit() {
            return None;
        }
        self.position += 1;

        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_digit() => self.position += 1,
                Some(b'#') => match self.comment_end() {
                    Some(end) => self.position = end,
                    None => break
                },
                _ => break
            }
        }
        Some(&window[start..self.position])
    }

    /// Consume one or more whitespace bytes
    fn whitespace_run(&mut self) -> bool {
        let start = self.position;

        while self.peek().is_some_and(is_space) {
            self.position += 1;
        }
        self.position > start
    }

    /// Consume exactly one carriage return or line feed
    fn line_end(&mut self) -> bool {
        if self.peek().is_some_and(is_line_end) {
            self.position += 1;
            return true;
        }
        false
    }

    fn magic(&mut self) -> Result<(), PPMParseErrors> {
        if !self.window.starts_with(b"P6") {
            return Err(PPMParseErrors::BadMagic);
        }
        self.position = 2;
        // The run must contain a whitespace byte of its own, a comment's
        // line ending does not count. Leaving the cursor after trailing
        // comments is fine, the next field skips them anyway.
        if !self.skip_separators() {
            return Err(PPMParseErrors::BadMagic);
        }
        Ok(())
    }

    fn dimension(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let token = self.digit_token()?;

        if !self.whitespace_run() {
            return None;
        }
        Some(token)
    }

    fn maxval(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let token = self.digit_token()?;

        if !self.line_end() {
            return None;
        }
        Some(token)
    }

    fn fields(mut self) -> Result<HeaderFields<'a>, PPMParseErrors> {
        self.magic()?;

        let width = self.dimension().ok_or(PPMParseErrors::MalformedWidth)?;
        let height = self.dimension().ok_or(PPMParseErrors::MalformedHeight)?;
        let maxval = self.maxval().ok_or(PPMParseErrors::MalformedMaxval)?;

        Ok(HeaderFields {
            width,
            height,
            maxval,
            raster_start: self.position
        })
    }
}

/// Strip comments from a lexed token and read the remaining digits
/// as a base 10 number.
///
/// Returns `None` on overflow.
fn decode_field(token: &[u8]) -> Option<usize> {
    let mut value = 0_usize;
    let mut in_comment = false;

    for &byte in token {
        if in_comment {
            in_comment = !is_line_end(byte);
            continue;
        }
        if byte == b'#' {
            in_comment = true;
            continue;
        }
        debug_assert!(byte.is_ascii_digit());

        value = value
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))?;
    }
    Some(value)
}

/// Lex and validate a P6 header at the start of `buffer`.
///
/// Only the first [`MAX_HEADER_LENGTH`] bytes are looked at. Fields are
/// lexed in order (magic, width, height, maxval) before any value checks,
/// so a malformed maxval is reported even if the width is zero. Values are
/// then decoded and checked one field at a time in the same order.
///
/// This does not check that the raster fits in `buffer`,
/// [`Pixmap::parse`](crate::Pixmap::parse) does that.
pub fn parse_header(buffer: &[u8]) -> Result<Header, PPMParseErrors> {
    let fields = HeaderLexer::new(buffer).fields()?;

    trace!("Raw header fields: {:?}", fields);

    // each field is decoded right before its own check, so a zero width
    // is reported even when a later field overflows
    let width = decode_field(fields.width).ok_or(PPMParseErrors::MalformedWidth)?;
    if width == 0 {
        return Err(PPMParseErrors::ZeroWidth);
    }
    let height = decode_field(fields.height).ok_or(PPMParseErrors::MalformedHeight)?;
    if height == 0 {
        return Err(PPMParseErrors::ZeroHeight);
    }
    let maxval = decode_field(fields.maxval).ok_or(PPMParseErrors::MalformedMaxval)?;
    let maxval = match u16::try_from(maxval) {
        Ok(value) if value != 0 => value,
        _ => return Err(PPMParseErrors::MaxvalOutOfRange(maxval))
    };

    trace!("Width: {}, height: {}", width, height);
    trace!("Maxval: {}", maxval);
    trace!("Raster starts at offset {}", fields.raster_start);

    Ok(Header {
        width,
        height,
        maxval,
        raster_start: fields.raster_start
    })
}
