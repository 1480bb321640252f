//! Bit reservoir: conversion between 8-bit bytes and `width`-bit symbol indices.
//!
//! Both directions read and write most-significant bit first, so the first
//! symbol of an encoding always carries the top bits of the first byte. Widths
//! 4 through 7 are supported; the accumulator never holds more than
//! `width + 7` bits, which fits comfortably in a `u32`.

use std::iter::FusedIterator;

use super::errors::DecodeError;

/// Smallest supported symbol width (radix-16).
pub const MIN_WIDTH: u32 = 4;
/// Largest supported symbol width (radix-128).
pub const MAX_WIDTH: u32 = 7;

/// Number of `width`-bit indices needed to cover `byte_len` bytes.
pub fn symbol_count(byte_len: usize, width: u32) -> usize {
    (byte_len * 8).div_ceil(width as usize)
}

/// Whether `count` indices can be produced by packing some whole number of bytes.
///
/// A count is valid when its leftover bits (after the last whole byte) are
/// fewer than one symbol; otherwise a whole symbol would carry no data.
pub fn is_valid_symbol_count(count: usize, width: u32) -> bool {
    (count * width as usize) % 8 < width as usize
}

/// Lazily packs bytes into `width`-bit indices.
///
/// Created by [`pack_bits`]. Each call to `pack_bits` starts from an empty
/// accumulator, and the iterator can be cloned to replay the sequence.
#[derive(Debug, Clone)]
pub struct PackBits<'a> {
    bytes: std::slice::Iter<'a, u8>,
    width: u32,
    bit_buffer: u32,
    bits_in_buffer: u32,
    remaining: usize,
}

/// Packs `bytes` into a sequence of `width`-bit indices.
///
/// The final partial group, if any, is right-padded with zero bits. The
/// sequence holds exactly [`symbol_count`]`(bytes.len(), width)` items.
///
/// # Panics
///
/// Panics if `width` is outside `4..=7`.
pub fn pack_bits(bytes: &[u8], width: u32) -> PackBits<'_> {
    assert!(
        (MIN_WIDTH..=MAX_WIDTH).contains(&width),
        "unsupported symbol width {}",
        width
    );
    PackBits {
        bytes: bytes.iter(),
        width,
        bit_buffer: 0,
        bits_in_buffer: 0,
        remaining: symbol_count(bytes.len(), width),
    }
}

impl Iterator for PackBits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }

        while self.bits_in_buffer < self.width {
            match self.bytes.next() {
                Some(&byte) => {
                    self.bit_buffer = (self.bit_buffer << 8) | byte as u32;
                    self.bits_in_buffer += 8;
                }
                None => {
                    // Input exhausted: zero-fill the last group
                    self.bit_buffer <<= self.width - self.bits_in_buffer;
                    self.bits_in_buffer = self.width;
                }
            }
        }

        self.bits_in_buffer -= self.width;
        let index = (self.bit_buffer >> self.bits_in_buffer) & ((1 << self.width) - 1);
        self.bit_buffer &= (1 << self.bits_in_buffer) - 1;
        self.remaining -= 1;

        Some(index as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PackBits<'_> {}

impl FusedIterator for PackBits<'_> {}

/// Unpacks `width`-bit indices back into bytes.
///
/// Bits of an index above `width` are ignored. After the last whole byte, the
/// leftover bits must be fewer than `width` and all zero; they are the
/// encoder's own padding and are discarded.
///
/// # Errors
///
/// - [`DecodeError::MalformedLength`] if the leftover bits fill a whole symbol
/// - [`DecodeError::NonZeroTrailingBits`] if any leftover bit is set
///
/// # Panics
///
/// Panics if `width` is outside `4..=7`.
pub fn unpack_bits<I>(indices: I, width: u32) -> Result<Vec<u8>, DecodeError>
where
    I: IntoIterator<Item = u8>,
{
    assert!(
        (MIN_WIDTH..=MAX_WIDTH).contains(&width),
        "unsupported symbol width {}",
        width
    );

    let indices = indices.into_iter();
    let mask = (1u32 << width) - 1;
    let mut result = Vec::with_capacity(indices.size_hint().0 * width as usize / 8);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;
    let mut count = 0usize;

    for index in indices {
        bit_buffer = (bit_buffer << width) | (index as u32 & mask);
        bits_in_buffer += width;
        count += 1;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
            bit_buffer &= (1 << bits_in_buffer) - 1;
        }
    }

    if bits_in_buffer >= width {
        return Err(DecodeError::malformed_length(
            count,
            format!(
                "a count that leaves fewer than {} unused bits ({} symbols leave {})",
                width, count, bits_in_buffer
            ),
            "the input has one symbol too many or is missing its final symbol",
        ));
    }

    if bit_buffer != 0 {
        return Err(DecodeError::NonZeroTrailingBits {
            bits: bits_in_buffer,
            value: bit_buffer as u8,
        });
    }

    Ok(result)
}
