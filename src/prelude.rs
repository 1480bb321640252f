//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use bin2text::prelude::*;
//!
//! let encoded = Base32::encode("prelude");
//! assert_eq!(Base32::decode(&encoded).unwrap(), "prelude");
//! assert_eq!(Codec::new(Format::Base32).encode("prelude"), encoded);
//! ```

pub use crate::{
    // Wrapper types and their trait
    Base128,
    Base16,
    Base32,
    Base64,
    Codec,
    DecodeError,
    Format,
    RadixCodec,

    // Free functions
    decode,
    decode_to_bytes,
    encode,
};
