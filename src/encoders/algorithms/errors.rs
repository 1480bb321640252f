use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is neither a symbol nor the pad character
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
        valid_symbols: String,
    },
    /// The symbol count cannot come from any byte count under this codec's rules
    MalformedLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// Pad characters in a non-trailing position, or the wrong number of them
    MalformedPadding { position: usize, hint: String },
    /// Leftover bits after the last whole byte were not zero
    NonZeroTrailingBits { bits: u32, value: u8 },
    /// The decoded bytes were requested as text but are not UTF-8
    InvalidUtf8 { valid_up_to: usize },
}

impl DecodeError {
    /// Create an InvalidSymbol error with context
    pub fn invalid_symbol(symbol: char, position: usize, input: &str, valid_symbols: &str) -> Self {
        DecodeError::InvalidSymbol {
            symbol,
            position,
            input: truncate_input(input),
            valid_symbols: valid_symbols.to_string(),
        }
    }

    /// Create a MalformedLength error
    pub fn malformed_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::MalformedLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    /// Create a MalformedPadding error
    pub fn malformed_padding(position: usize, hint: impl Into<String>) -> Self {
        DecodeError::MalformedPadding {
            position,
            hint: hint.into(),
        }
    }
}

// Long inputs are cut at 60 characters (not bytes) so the caret stays aligned.
fn truncate_input(input: &str) -> String {
    match input.char_indices().nth(60) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidSymbol {
                symbol,
                position,
                input,
                valid_symbols,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid symbol {:?} at position {}", symbol, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Inputs are truncated past 60 characters, so the caret may fall off the end
                writeln!(f, "  {}", input)?;
                if *position <= input.chars().count() {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                let hint_symbols = match valid_symbols.char_indices().nth(80) {
                    Some((cut, _)) => format!("{}...", &valid_symbols[..cut]),
                    None => valid_symbols.clone(),
                };
                write_hint(f, use_color, &format!("valid symbols: {}", hint_symbols))
            }
            DecodeError::MalformedLength {
                actual,
                expected,
                hint,
            } => {
                write_header(f, use_color, "malformed length for decode")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(f, "  input is {} symbols, expected {}", actual, expected)?;
                writeln!(f)?;
                write_hint(f, use_color, hint)
            }
            DecodeError::MalformedPadding { position, hint } => {
                write_header(
                    f,
                    use_color,
                    &format!("malformed padding at position {}", position),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(f, use_color, hint)
            }
            DecodeError::NonZeroTrailingBits { bits, value } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "{} trailing bit(s) after the last byte are non-zero ({:#b})",
                        bits, value
                    ),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "the final symbol was altered or the input was truncated",
                )
            }
            DecodeError::InvalidUtf8 { valid_up_to } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "decoded bytes are not valid UTF-8 (valid up to byte {})",
                        valid_up_to
                    ),
                )?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(f, use_color, "decode to bytes to keep binary output")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a format name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl FormatNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for FormatNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color, &format!("format '{}' not found", self.name))?;
        writeln!(f)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`bin2text --list`\x1b[0m to see all formats"
            )
        } else {
            write!(f, "      run `bin2text --list` to see all formats")
        }
    }
}

impl std::error::Error for FormatNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching format name
pub fn find_closest_format(name: &str, available: &[&str]) -> Option<String> {
    // Short names tolerate fewer typos
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}
