use crate::core::alphabet::Alphabet;
use crate::core::format::Format;
use crate::encoders::algorithms::chunked::{decode_chunked, encode_chunked};
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::padding::PaddingPolicy;

/// A format bound to its alphabet and padding policy.
///
/// Codecs are stateless and `Copy`; every call is independent, so one codec
/// can be shared freely across threads.
///
/// # Example
///
/// ```
/// use bin2text::{Codec, Format};
///
/// let codec = Codec::new(Format::Base64);
/// let encoded = codec.encode("Hello, World!");
/// assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
/// assert_eq!(codec.decode(&encoded).unwrap(), "Hello, World!");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    format: Format,
    alphabet: &'static Alphabet,
    policy: PaddingPolicy,
}

impl Codec {
    pub fn new(format: Format) -> Self {
        let alphabet = format.alphabet();
        Codec {
            format,
            alphabet,
            policy: PaddingPolicy::of(alphabet),
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub fn policy(&self) -> PaddingPolicy {
        self.policy
    }

    /// Number of characters `encode` produces for `byte_len` input bytes.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        self.policy
            .encoded_len(byte_len, self.alphabet.bits_per_symbol())
    }

    /// Encodes text or raw bytes. Never fails.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> String {
        encode_chunked(data.as_ref(), self.alphabet)
    }

    /// Decodes to raw bytes.
    pub fn decode_to_bytes(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        decode_chunked(encoded, self.alphabet)
    }

    /// Decodes to UTF-8 text.
    ///
    /// # Errors
    ///
    /// Any error of [`decode_to_bytes`](Self::decode_to_bytes), or
    /// [`DecodeError::InvalidUtf8`] when the bytes are not UTF-8.
    pub fn decode(&self, encoded: &str) -> Result<String, DecodeError> {
        let bytes = self.decode_to_bytes(encoded)?;
        String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }
}

impl From<Format> for Codec {
    fn from(format: Format) -> Self {
        Codec::new(format)
    }
}
