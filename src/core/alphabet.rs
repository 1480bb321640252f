use std::collections::HashMap;
use std::sync::OnceLock;

use crate::encoders::algorithms::bits::{MAX_WIDTH, MIN_WIDTH};

const BASE64_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE32_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE16_SYMBOLS: &str = "0123456789ABCDEF";

/// Standard pad character for base64 and base32.
pub const PAD: char = '=';

/// Radix-128 symbols: printable ASCII `!`..=`~` (94), then the Latin-1
/// letters U+00C0..=U+00D6 and U+00D8..=U+00E2 (34), skipping U+00D7 `×`.
fn base128_symbols() -> Vec<char> {
    ('!'..='~')
        .chain('\u{C0}'..='\u{D6}')
        .chain('\u{D8}'..='\u{E2}')
        .collect()
}

static BASE64: OnceLock<Alphabet> = OnceLock::new();
static BASE32: OnceLock<Alphabet> = OnceLock::new();
static BASE16: OnceLock<Alphabet> = OnceLock::new();
static BASE128: OnceLock<Alphabet> = OnceLock::new();

/// An ordered table of symbols plus its inverse map.
///
/// Symbol `i` encodes the bit group with value `i`. The table size is a power
/// of two between 16 and 128, so each symbol carries `log2(size)` bits.
///
/// # Example
///
/// ```
/// use bin2text::Alphabet;
///
/// let hex = Alphabet::base16();
/// assert_eq!(hex.base(), 16);
/// assert_eq!(hex.encode_digit(10), Some('A'));
/// assert_eq!(hex.decode_char('a'), Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    symbol_to_index: HashMap<char, u8>,
    padding: Option<char>,
    case_folding: bool,
}

impl Alphabet {
    /// Creates an alphabet from its symbols and optional pad character.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The symbol count is not 16, 32, 64 or 128
    /// - A symbol repeats, or is a control or whitespace character
    /// - The pad character is itself a symbol
    pub fn new(symbols: Vec<char>, padding: Option<char>) -> Result<Self, String> {
        let base = symbols.len();
        if !base.is_power_of_two()
            || !(MIN_WIDTH..=MAX_WIDTH).contains(&base.trailing_zeros())
        {
            return Err(format!(
                "Alphabet must have 16, 32, 64 or 128 symbols, got {}",
                base
            ));
        }

        let mut symbol_to_index = HashMap::with_capacity(base);
        for (i, &c) in symbols.iter().enumerate() {
            if c.is_control() || c.is_whitespace() {
                return Err(format!(
                    "Alphabet symbol U+{:04X} is not printable",
                    c as u32
                ));
            }
            if symbol_to_index.insert(c, i as u8).is_some() {
                return Err(format!("Duplicate symbol in alphabet: {}", c));
            }
        }

        if let Some(pad) = padding {
            if symbol_to_index.contains_key(&pad) {
                return Err(format!("Padding character '{}' is also a symbol", pad));
            }
        }

        Ok(Alphabet {
            symbols,
            symbol_to_index,
            padding,
            case_folding: false,
        })
    }

    /// Accepts either ASCII case on decode when only one case is in the table.
    pub fn with_case_folding(mut self) -> Self {
        self.case_folding = true;
        self
    }

    /// The RFC 4648 base64 alphabet with `=` padding.
    pub fn base64() -> &'static Alphabet {
        BASE64.get_or_init(|| builtin(BASE64_SYMBOLS.chars().collect(), Some(PAD), false))
    }

    /// The RFC 4648 base32 alphabet with `=` padding. Decoding folds case.
    pub fn base32() -> &'static Alphabet {
        BASE32.get_or_init(|| builtin(BASE32_SYMBOLS.chars().collect(), Some(PAD), true))
    }

    /// Uppercase hexadecimal digits, unpadded. Decoding folds case.
    pub fn base16() -> &'static Alphabet {
        BASE16.get_or_init(|| builtin(BASE16_SYMBOLS.chars().collect(), None, true))
    }

    /// The 128-symbol table, unpadded and case-sensitive.
    pub fn base128() -> &'static Alphabet {
        BASE128.get_or_init(|| builtin(base128_symbols(), None, false))
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns how many bits each symbol carries.
    pub fn bits_per_symbol(&self) -> u32 {
        self.symbols.len().trailing_zeros()
    }

    /// Returns the padding character, if any.
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    /// Returns whether `c` is this alphabet's pad character.
    pub fn is_padding(&self, c: char) -> bool {
        self.padding == Some(c)
    }

    /// Returns the symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol for `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`base`](Self::base). Packed indices are
    /// always in range, so this only fires on a broken invariant.
    pub fn symbol(&self, index: u8) -> char {
        self.symbols[index as usize]
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet. The pad
    /// character is never a symbol.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        if let Some(&index) = self.symbol_to_index.get(&c) {
            return Some(index);
        }
        if !self.case_folding {
            return None;
        }

        let folded = if c.is_ascii_lowercase() {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        };
        self.symbol_to_index.get(&folded).copied()
    }

    /// Describes the accepted symbols for error hints.
    pub fn valid_symbols(&self) -> String {
        if self.base() <= 64 {
            self.symbols.iter().collect()
        } else {
            format!("{} symbols in alphabet", self.base())
        }
    }
}

// Built-in tables are constants; a failure here is a bug in the table itself.
fn builtin(symbols: Vec<char>, padding: Option<char>, case_folding: bool) -> Alphabet {
    let alphabet = match Alphabet::new(symbols, padding) {
        Ok(alphabet) => alphabet,
        Err(e) => panic!("built-in alphabet is invalid: {}", e),
    };
    if case_folding {
        alphabet.with_case_folding()
    } else {
        alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_sizes() {
        assert_eq!(Alphabet::base64().base(), 64);
        assert_eq!(Alphabet::base32().base(), 32);
        assert_eq!(Alphabet::base16().base(), 16);
        assert_eq!(Alphabet::base128().base(), 128);
    }

    #[test]
    fn test_bits_per_symbol() {
        assert_eq!(Alphabet::base16().bits_per_symbol(), 4);
        assert_eq!(Alphabet::base32().bits_per_symbol(), 5);
        assert_eq!(Alphabet::base64().bits_per_symbol(), 6);
        assert_eq!(Alphabet::base128().bits_per_symbol(), 7);
    }

    #[test]
    fn test_padding() {
        assert_eq!(Alphabet::base64().padding(), Some('='));
        assert_eq!(Alphabet::base32().padding(), Some('='));
        assert_eq!(Alphabet::base16().padding(), None);
        assert_eq!(Alphabet::base128().padding(), None);
        assert!(Alphabet::base64().is_padding('='));
        assert!(!Alphabet::base128().is_padding('='));
    }

    #[test]
    fn test_tables_are_bijective() {
        for alphabet in [
            Alphabet::base64(),
            Alphabet::base32(),
            Alphabet::base16(),
            Alphabet::base128(),
        ] {
            for index in 0..alphabet.base() {
                let symbol = alphabet.symbol(index as u8);
                assert_eq!(alphabet.decode_char(symbol), Some(index as u8));
            }
        }
    }

    #[test]
    fn test_base128_table_layout() {
        let base128 = Alphabet::base128();
        let unique: HashSet<char> = base128.symbols().iter().copied().collect();
        assert_eq!(unique.len(), 128);

        assert_eq!(base128.symbol(0), '!');
        assert_eq!(base128.symbol(32), 'A');
        assert_eq!(base128.symbol(93), '~');
        assert_eq!(base128.symbol(94), 'À');
        assert_eq!(base128.symbol(116), 'Ö');
        assert_eq!(base128.symbol(117), 'Ø');
        assert_eq!(base128.symbol(127), 'â');
        assert_eq!(base128.decode_char('×'), None);
        assert_eq!(base128.decode_char(' '), None);
    }

    #[test]
    fn test_base128_is_case_sensitive() {
        let base128 = Alphabet::base128();
        assert_ne!(base128.decode_char('a'), base128.decode_char('A'));
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(Alphabet::base16().decode_char('f'), Some(15));
        assert_eq!(Alphabet::base16().decode_char('F'), Some(15));
        assert_eq!(Alphabet::base32().decode_char('a'), Some(0));
        assert_eq!(Alphabet::base64().decode_char('a'), Some(26));
        assert_eq!(Alphabet::base64().decode_char('A'), Some(0));
        assert_eq!(Alphabet::base16().decode_char('g'), None);
    }

    #[test]
    fn test_pad_is_not_a_symbol() {
        assert_eq!(Alphabet::base64().decode_char('='), None);
        assert_eq!(Alphabet::base32().decode_char('='), None);
    }

    #[test]
    fn test_encode_digit_out_of_range() {
        assert_eq!(Alphabet::base16().encode_digit(15), Some('F'));
        assert_eq!(Alphabet::base16().encode_digit(16), None);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        let err = Alphabet::new("ABC".chars().collect(), None).unwrap_err();
        assert!(err.contains("got 3"));

        let eight: Vec<char> = "ABCDEFGH".chars().collect();
        assert!(Alphabet::new(eight, None).is_err());

        let too_many: Vec<char> = ('\u{100}'..'\u{200}').collect();
        assert!(Alphabet::new(too_many, None).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut symbols: Vec<char> = BASE16_SYMBOLS.chars().collect();
        symbols[15] = '0';
        let err = Alphabet::new(symbols, None).unwrap_err();
        assert!(err.contains("Duplicate symbol"));
    }

    #[test]
    fn test_rejects_unprintable() {
        let mut symbols: Vec<char> = BASE16_SYMBOLS.chars().collect();
        symbols[0] = ' ';
        assert!(Alphabet::new(symbols.clone(), None).is_err());
        symbols[0] = '\u{7}';
        assert!(Alphabet::new(symbols, None).is_err());
    }

    #[test]
    fn test_rejects_pad_inside_table() {
        let symbols: Vec<char> = BASE16_SYMBOLS.chars().collect();
        let err = Alphabet::new(symbols, Some('A')).unwrap_err();
        assert!(err.contains("also a symbol"));
    }

    #[test]
    fn test_valid_symbols_hint() {
        assert_eq!(Alphabet::base16().valid_symbols(), "0123456789ABCDEF");
        assert_eq!(
            Alphabet::base128().valid_symbols(),
            "128 symbols in alphabet"
        );
    }
}
