use super::models::DeckConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Parse a TOML configuration, falling back to defaults when it is invalid.
pub fn parse_config(contents: &str) -> DeckConfig {
    if contents.trim().is_empty() {
        debug!("Empty deck config; using defaults");
        return DeckConfig::default();
    }

    match toml::from_str::<ConfigTables>(contents) {
        Ok(tables) => {
            debug!("Parsed deck configuration");
            DeckConfig::from(tables).normalized()
        }
        Err(err) => {
            warn!("Invalid deck config TOML, using defaults: {err}");
            DeckConfig::default()
        }
    }
}

pub fn serialize_config(config: &DeckConfig) -> Result<String> {
    toml::to_string(&ConfigTables::from(config)).context("Failed to serialize deck config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn reads_sectioned_tables() {
        let config = parse_config(
            r#"
            [navigation]
            swipe_threshold_px = 80.0
            double_press_window_ms = 300

            [presenter]
            window_name = "speaker"
            tick_interval_ms = 250

            [logging]
            log_level = "debug"
            "#,
        );

        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.double_press_window_ms, 300);
        assert_eq!(config.presenter_window_name, "speaker");
        assert_eq!(config.presenter_window_width, 1200);
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.start_time_key, "presenterStartTime");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        assert_eq!(parse_config("[navigation\nnope"), DeckConfig::default());
        assert_eq!(
            parse_config("[logging]\nlog_level = \"loud\""),
            DeckConfig::default()
        );
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let config = parse_config(
            r#"
            [navigation]
            swipe_threshold_px = -4.0

            [presenter]
            window_width = 0
            tick_interval_ms = 5
            start_time_key = "  "
            "#,
        );

        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.presenter_window_width, 1);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.start_time_key, "presenterStartTime");
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = DeckConfig::default();
        config.double_press_window_ms = 750;
        config.log_level = LogLevel::Warn;

        let text = serialize_config(&config).expect("serialize");
        assert!(text.contains("[presenter]"));
        assert_eq!(parse_config(&text), config);
    }
}
