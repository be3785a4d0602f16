//! Configuration types
//!
//! - `base`: core configuration (Config, Format, Writer)
//! - `display`: display toggles
//! - `presets`: environment loading and ready-made setups

mod base;
mod display;
mod presets;

pub use base::{Config, Format, Writer};
pub use display::DisplayConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn deserializes_partial_config() {
        let config: Config = serde_json::from_str(
            r#"{"level": "debug", "format": "json", "display": {"time": false}}"#,
        )
        .unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, Writer::Stderr);
        assert!(!config.display.time);
        assert!(config.display.target);
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case(" Compact ", Format::Compact)]
    #[case("JSON", Format::Json)]
    fn parses_format(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(input.parse::<Format>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!("xml".parse::<Format>().is_err());
        assert_eq!(Format::Json.to_string(), "json");
    }
}
