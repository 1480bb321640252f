use crate::core::alphabet::Alphabet;

use super::bits::{pack_bits, unpack_bits};
use super::padding::PaddingPolicy;

pub use super::errors::DecodeError;

/// Encodes `data` with a power-of-two alphabet, padding per its policy.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    let width = alphabet.bits_per_symbol();
    let policy = PaddingPolicy::of(alphabet);

    // Symbols are not necessarily one byte each (base128 uses Latin-1 letters)
    let mut result = String::with_capacity(policy.encoded_len(data.len(), width) * 2);

    let indices = pack_bits(data, width);
    let symbols = indices.len();
    result.extend(indices.map(|index| alphabet.symbol(index)));

    policy.apply(&mut result, symbols, width);
    result
}

/// Decodes text produced by [`encode_chunked`] with the same alphabet.
///
/// Checks run in order: every character must be a symbol or a trailing pad,
/// the symbol and pad counts must fit the padding policy, and the unused
/// bits of the final symbol must be zero.
pub fn decode_chunked(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let width = alphabet.bits_per_symbol();
    let policy = PaddingPolicy::of(alphabet);

    let mut indices = Vec::with_capacity(encoded.len());
    let mut first_pad = None;
    let mut total = 0;

    for (position, c) in encoded.chars().enumerate() {
        total += 1;

        if alphabet.is_padding(c) {
            first_pad.get_or_insert(position);
            continue;
        }

        let index = alphabet.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_symbol(c, position, encoded, &alphabet.valid_symbols())
        })?;

        if let Some(pad_position) = first_pad {
            return Err(DecodeError::malformed_padding(
                pad_position,
                format!(
                    "padding may only appear at the end of input, found {:?} at position {}",
                    c, position
                ),
            ));
        }

        indices.push(index);
    }

    policy.check(indices.len(), total, first_pad, width)?;
    unpack_bits(indices, width)
}
