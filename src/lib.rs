//! Binary-to-text codecs over one shared bit-packing engine.
//!
//! Four formats are supported: RFC 4648 base64 and base32 (with `=` padding),
//! uppercase base16, and a non-standard base128 that packs 7 bytes into 8
//! symbols. All of them run through the same bit reservoir
//! ([`encoders::bits`]), which splits bytes into fixed-width indices and joins
//! them back, differing only in alphabet and padding policy.
//!
//! # Example
//!
//! ```
//! use bin2text::{base64_encode, base64_decode, base16_encode, Format, Codec};
//!
//! assert_eq!(base64_encode("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(base64_decode("QQ==").unwrap(), "A");
//! assert_eq!(base16_encode("Hi"), "4869");
//!
//! let codec = Codec::new(Format::Base128);
//! let bytes = [0u8, 1, 2, 253, 254, 255];
//! assert_eq!(codec.decode_to_bytes(&codec.encode(bytes)).unwrap(), bytes);
//! ```

mod core;
pub mod convenience;
pub mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{Alphabet, PAD};
pub use crate::core::config::{Config, Settings};
pub use crate::core::format::Format;

pub use encoders::algorithms::{DecodeError, FormatNotFoundError, find_closest_format};
pub use encoders::bits::{pack_bits, unpack_bits, PackBits};
pub use encoders::codec::Codec;
pub use encoders::padding::PaddingPolicy;

pub use convenience::{
    Base128, Base16, Base32, Base64, RadixCodec, base128_decode, base128_decode_to_bytes,
    base128_encode, base16_decode, base16_decode_to_bytes, base16_encode, base32_decode,
    base32_decode_to_bytes, base32_encode, base64_decode, base64_decode_to_bytes, base64_encode,
    decode, decode_to_bytes, encode,
};
