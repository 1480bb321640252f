mod config;
mod handlers;

use clap::{CommandFactory, Parser};

use config::{load_config, resolve_format};

#[derive(Parser)]
#[command(name = "bin2text")]
#[command(version)]
#[command(about = "Binary to text encoding/decoding tool (base64, base32, base16, base128)", long_about = None)]
struct Cli {
    /// Encode a string
    #[arg(short = 'e', long, value_name = "TEXT")]
    encode: Option<String>,

    /// Decode an encoded string
    #[arg(short = 'd', long, value_name = "TEXT", conflicts_with = "encode")]
    decode: Option<String>,

    /// Encoding format: base64, base32, base16 or base128 (default: base64)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    format: Option<String>,

    /// Read settings from this file after the standard locations
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// List available formats
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        handlers::list::handle();
        return Ok(());
    }

    if cli.encode.is_none() && cli.decode.is_none() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let format = resolve_format(cli.format.as_deref(), &config)?;

    if let Some(text) = &cli.encode {
        handlers::encode::handle(text, format);
    } else if let Some(text) = &cli.decode {
        handlers::decode::handle(text, format)?;
    }

    Ok(())
}
