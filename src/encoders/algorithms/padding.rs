use num_integer::lcm;

use super::bits::{is_valid_symbol_count, symbol_count};
use super::errors::DecodeError;
use crate::core::alphabet::Alphabet;

/// Bytes in one block, the smallest input that packs into whole symbols.
///
/// Base64: LCM(6,8)=24 bits, 3 bytes. Base32: LCM(5,8)=40 bits, 5 bytes.
/// Base16: LCM(4,8)=8 bits, 1 byte. Base128: LCM(7,8)=56 bits, 7 bytes.
pub fn block_bytes(width: u32) -> usize {
    lcm(width as usize, 8) / 8
}

/// Symbols in one block: 4 for base64, 8 for base32, 2 for base16, 8 for base128.
pub fn block_symbols(width: u32) -> usize {
    lcm(width as usize, 8) / width as usize
}

/// How a codec fills out a final partial block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Fill the last block up to `block_symbols` with `pad` (base64, base32).
    Padded { pad: char },
    /// Emit only the symbols that carry bits. The symbol count alone
    /// determines the byte count (base16 pairs, base128 tails).
    Unpadded,
}

impl PaddingPolicy {
    /// The policy implied by an alphabet's pad character.
    pub fn of(alphabet: &Alphabet) -> Self {
        match alphabet.padding() {
            Some(pad) => PaddingPolicy::Padded { pad },
            None => PaddingPolicy::Unpadded,
        }
    }

    /// Returns the pad character, if this policy uses one.
    pub fn pad(&self) -> Option<char> {
        match self {
            PaddingPolicy::Padded { pad } => Some(*pad),
            PaddingPolicy::Unpadded => None,
        }
    }

    /// Total characters (symbols and pads) produced for `byte_len` input bytes.
    pub fn encoded_len(&self, byte_len: usize, width: u32) -> usize {
        let symbols = symbol_count(byte_len, width);
        match self {
            PaddingPolicy::Padded { .. } => {
                let group = block_symbols(width);
                symbols.div_ceil(group) * group
            }
            PaddingPolicy::Unpadded => symbols,
        }
    }

    /// Number of pad characters that follow `symbols` meaningful symbols.
    pub fn pad_count(&self, symbols: usize, width: u32) -> usize {
        match self {
            PaddingPolicy::Padded { .. } => {
                let group = block_symbols(width);
                symbols.div_ceil(group) * group - symbols
            }
            PaddingPolicy::Unpadded => 0,
        }
    }

    /// Appends the pad characters owed after `symbols` meaningful symbols.
    pub fn apply(&self, out: &mut String, symbols: usize, width: u32) {
        if let PaddingPolicy::Padded { pad } = self {
            let count = self.pad_count(symbols, width);
            out.extend(std::iter::repeat_n(*pad, count));
        }
    }

    /// Validates the shape of a decode input before unpacking.
    ///
    /// `symbols` counts meaningful symbols, `total` counts every character
    /// including pads, and `first_pad` is the position of the first pad.
    /// Pads are already known to be trailing.
    pub fn check(
        &self,
        symbols: usize,
        total: usize,
        first_pad: Option<usize>,
        width: u32,
    ) -> Result<(), DecodeError> {
        match self {
            PaddingPolicy::Padded { pad } => {
                let group = block_symbols(width);

                if total % group != 0 {
                    return Err(DecodeError::malformed_length(
                        total,
                        format!("a multiple of {}", group),
                        format!(
                            "add '{}' padding or check for missing characters",
                            pad
                        ),
                    ));
                }

                let pads = total - symbols;
                if let Some(position) = first_pad {
                    let tail = group - pads.min(group);
                    if pads >= group || !is_valid_symbol_count(tail, width) {
                        return Err(DecodeError::malformed_padding(
                            position,
                            format!(
                                "{} '{}' character(s) cannot close a block of {} symbols",
                                pads, pad, group
                            ),
                        ));
                    }
                }

                Ok(())
            }
            PaddingPolicy::Unpadded => {
                if is_valid_symbol_count(symbols, width) {
                    return Ok(());
                }

                let (expected, hint) = if block_bytes(width) == 1 {
                    (
                        "an even number of symbols".to_string(),
                        "every byte is written as exactly two symbols".to_string(),
                    )
                } else {
                    let group = block_symbols(width);
                    (
                        format!(
                            "a count that is not {} more than a multiple of {}",
                            symbols % group,
                            group
                        ),
                        "the input has one symbol too many or is missing its final symbol"
                            .to_string(),
                    )
                };

                Err(DecodeError::malformed_length(symbols, expected, hint))
            }
        }
    }
}
