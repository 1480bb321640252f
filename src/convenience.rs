//! Per-format free functions and stateless wrapper types.
//!
//! Each format gets `<format>_encode`, `<format>_decode` (to UTF-8 text) and
//! `<format>_decode_to_bytes`. The wrapper types `Base64`, `Base32`, `Base16`
//! and `Base128` expose the same operations through [`RadixCodec`].

use crate::core::format::Format;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::codec::Codec;

/// Encodes text or bytes in `format`.
pub fn encode(data: impl AsRef<[u8]>, format: Format) -> String {
    Codec::new(format).encode(data)
}

/// Decodes `encoded` in `format` to UTF-8 text.
pub fn decode(encoded: &str, format: Format) -> Result<String, DecodeError> {
    Codec::new(format).decode(encoded)
}

/// Decodes `encoded` in `format` to raw bytes.
pub fn decode_to_bytes(encoded: &str, format: Format) -> Result<Vec<u8>, DecodeError> {
    Codec::new(format).decode_to_bytes(encoded)
}

/// A format's codec as a type, for callers that prefer `Base64::encode(..)`.
pub trait RadixCodec {
    const FORMAT: Format;

    fn encode(data: impl AsRef<[u8]>) -> String {
        encode(data, Self::FORMAT)
    }

    fn decode(encoded: &str) -> Result<String, DecodeError> {
        decode(encoded, Self::FORMAT)
    }

    fn decode_to_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
        decode_to_bytes(encoded, Self::FORMAT)
    }
}

/// RFC 4648 base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

/// RFC 4648 base32.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32;

/// Uppercase hexadecimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base16;

/// 7-bit symbols over the fixed 128-symbol table.
///
/// The table extends printable ASCII with Latin-1 letters, so encoded output
/// is valid UTF-8 but not ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base128;

impl RadixCodec for Base64 {
    const FORMAT: Format = Format::Base64;
}

impl RadixCodec for Base32 {
    const FORMAT: Format = Format::Base32;
}

impl RadixCodec for Base16 {
    const FORMAT: Format = Format::Base16;
}

impl RadixCodec for Base128 {
    const FORMAT: Format = Format::Base128;
}

/// Encodes to base64.
///
/// # Example
/// ```
/// assert_eq!(bin2text::base64_encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn base64_encode(data: impl AsRef<[u8]>) -> String {
    Base64::encode(data)
}

/// Decodes base64 to UTF-8 text.
///
/// # Example
/// ```
/// assert_eq!(bin2text::base64_decode("QQ==").unwrap(), "A");
/// ```
pub fn base64_decode(encoded: &str) -> Result<String, DecodeError> {
    Base64::decode(encoded)
}

/// Decodes base64 to raw bytes.
///
/// # Example
/// ```
/// assert_eq!(bin2text::base64_decode_to_bytes("/w==").unwrap(), vec![0xFF]);
/// ```
pub fn base64_decode_to_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    Base64::decode_to_bytes(encoded)
}

/// Encodes to base32.
pub fn base32_encode(data: impl AsRef<[u8]>) -> String {
    Base32::encode(data)
}

/// Decodes base32 (either case) to UTF-8 text.
pub fn base32_decode(encoded: &str) -> Result<String, DecodeError> {
    Base32::decode(encoded)
}

/// Decodes base32 to raw bytes.
pub fn base32_decode_to_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    Base32::decode_to_bytes(encoded)
}

/// Encodes to uppercase hexadecimal.
pub fn base16_encode(data: impl AsRef<[u8]>) -> String {
    Base16::encode(data)
}

/// Decodes hexadecimal (either case) to UTF-8 text.
pub fn base16_decode(encoded: &str) -> Result<String, DecodeError> {
    Base16::decode(encoded)
}

/// Decodes base16 to raw bytes.
pub fn base16_decode_to_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    Base16::decode_to_bytes(encoded)
}

/// Encodes to base128.
///
/// Every 7 input bytes become 8 symbols; a shorter tail becomes
/// `ceil(bits / 7)` symbols with no padding. Output is valid UTF-8 but not
/// ASCII: 34 of the symbols are Latin-1 letters (`À`..=`â`, without `×`).
///
/// # Example
/// ```
/// let encoded = bin2text::base128_encode([0xFF]);
/// assert_eq!(encoded, "âa");
/// assert!(!encoded.is_ascii());
/// ```
pub fn base128_encode(data: impl AsRef<[u8]>) -> String {
    Base128::encode(data)
}

/// Decodes base128 to UTF-8 text.
pub fn base128_decode(encoded: &str) -> Result<String, DecodeError> {
    Base128::decode(encoded)
}

/// Decodes base128 to raw bytes.
pub fn base128_decode_to_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    Base128::decode_to_bytes(encoded)
}
