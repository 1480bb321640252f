use std::fmt;
use std::str::FromStr;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::{FormatNotFoundError, find_closest_format};
use crate::encoders::algorithms::padding::{block_bytes, block_symbols};

/// The four supported binary-to-text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// RFC 4648 base64, 6 bits per symbol, `=` padded to 4-symbol blocks.
    Base64,
    /// RFC 4648 base32, 5 bits per symbol, `=` padded to 8-symbol blocks.
    Base32,
    /// Uppercase hexadecimal, 4 bits per symbol, no padding.
    Base16,
    /// 7 bits per symbol over a fixed 128-symbol table, no padding.
    Base128,
}

impl Format {
    /// Every format, in listing order.
    pub const ALL: [Format; 4] = [Format::Base64, Format::Base32, Format::Base16, Format::Base128];

    /// Canonical name, as accepted by `--format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Base64 => "base64",
            Format::Base32 => "base32",
            Format::Base16 => "base16",
            Format::Base128 => "base128",
        }
    }

    pub fn radix(&self) -> usize {
        self.alphabet().base()
    }

    pub fn bits_per_symbol(&self) -> u32 {
        self.alphabet().bits_per_symbol()
    }

    /// Block shape as (bytes, symbols): the smallest input with no partial symbol.
    pub fn block(&self) -> (usize, usize) {
        let width = self.bits_per_symbol();
        (block_bytes(width), block_symbols(width))
    }

    /// The process-wide symbol table for this format.
    pub fn alphabet(&self) -> &'static Alphabet {
        match self {
            Format::Base64 => Alphabet::base64(),
            Format::Base32 => Alphabet::base32(),
            Format::Base16 => Alphabet::base16(),
            Format::Base128 => Alphabet::base128(),
        }
    }

    /// Canonical names of all formats.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Format::as_str).collect()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatNotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "base64" | "b64" => Ok(Format::Base64),
            "base32" | "b32" => Ok(Format::Base32),
            "base16" | "b16" | "hex" => Ok(Format::Base16),
            "base128" | "b128" => Ok(Format::Base128),
            _ => Err(FormatNotFoundError::new(
                s,
                find_closest_format(&name, &Self::names()),
            )),
        }
    }
}
