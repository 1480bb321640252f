use bin2text::{Codec, Format};

pub fn handle(text: &str, format: Format) {
    let encoded = Codec::new(format).encode(text);
    println!("Encoded ({}): {}", format, encoded);
}
