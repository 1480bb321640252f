use bin2text::{Codec, Format};

/// Decodes `text` and prints it; surrounding whitespace is ignored.
pub fn handle(text: &str, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = Codec::new(format).decode(text.trim())?;
    println!("Decoded ({}): {}", format, decoded);
    Ok(())
}
