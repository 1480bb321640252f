use bin2text::{Config, Format};
use std::path::PathBuf;

/// Loads built-in, user and local settings, then the `--config` file if given.
///
/// Unlike the standard locations, an explicit file must exist and parse.
pub fn load_config(explicit: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::load_with_overrides()?;

    if let Some(path) = explicit {
        let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
        let overrides = Config::load_from_file(&expanded)
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        config.merge(overrides);
    }

    Ok(config)
}

/// `--format` wins over the configured default.
pub fn resolve_format(
    cli_format: Option<&str>,
    config: &Config,
) -> Result<Format, Box<dyn std::error::Error>> {
    match cli_format {
        Some(name) => Ok(name.parse::<Format>()?),
        None => config.default_format(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let config = Config::from_toml("[settings]\ndefault_format = \"base32\"\n").unwrap();
        assert_eq!(resolve_format(Some("hex"), &config).unwrap(), Format::Base16);
        assert_eq!(resolve_format(None, &config).unwrap(), Format::Base32);
    }

    #[test]
    fn test_unknown_cli_format() {
        let config = Config::default();
        let err = resolve_format(Some("base46"), &config).unwrap_err();
        assert!(err.to_string().contains("format 'base46' not found"));
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("/nonexistent/bin2text.toml")).unwrap_err();
        assert!(err.to_string().contains("Cannot load config"));
    }
}
