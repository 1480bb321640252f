use bin2text::Format;

pub fn handle() {
    println!("Available formats:\n");

    for format in Format::ALL {
        let alphabet = format.alphabet();
        let preview: String = alphabet.symbols().iter().take(20).collect();
        let suffix = if alphabet.base() > 20 { "..." } else { "" };
        let padding = match alphabet.padding() {
            Some(pad) => format!("pad '{}'", pad),
            None => "no pad".to_string(),
        };
        let (bytes, symbols) = format.block();

        println!(
            "  {:<8} radix-{:<4} {}:{} {:<8} {}{}",
            format.as_str(),
            format.radix(),
            bytes,
            symbols,
            padding,
            preview,
            suffix
        );
    }
}
