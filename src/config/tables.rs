use super::defaults;
use super::models::{DeckConfig, LogLevel};
use serde::Deserialize;

/// On-disk layout of the deck configuration, grouped into TOML tables.
#[derive(Debug, Clone, Deserialize, serde::Serialize, Default)]
pub(super) struct ConfigTables {
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    presenter: PresenterConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for DeckConfig {
    fn from(tables: ConfigTables) -> Self {
        DeckConfig {
            swipe_threshold_px: tables.navigation.swipe_threshold_px,
            double_press_window_ms: tables.navigation.double_press_window_ms,
            presenter_window_name: tables.presenter.window_name,
            presenter_window_width: tables.presenter.window_width,
            presenter_window_height: tables.presenter.window_height,
            tick_interval_ms: tables.presenter.tick_interval_ms,
            start_time_key: tables.presenter.start_time_key,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&DeckConfig> for ConfigTables {
    fn from(config: &DeckConfig) -> Self {
        ConfigTables {
            navigation: NavigationConfig {
                swipe_threshold_px: config.swipe_threshold_px,
                double_press_window_ms: config.double_press_window_ms,
            },
            presenter: PresenterConfig {
                window_name: config.presenter_window_name.clone(),
                window_width: config.presenter_window_width,
                window_height: config.presenter_window_height,
                tick_interval_ms: config.tick_interval_ms,
                start_time_key: config.start_time_key.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_swipe_threshold_px")]
    swipe_threshold_px: f64,
    #[serde(default = "defaults::default_double_press_window_ms")]
    double_press_window_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            swipe_threshold_px: defaults::default_swipe_threshold_px(),
            double_press_window_ms: defaults::default_double_press_window_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PresenterConfig {
    #[serde(default = "defaults::default_presenter_window_name")]
    window_name: String,
    #[serde(default = "defaults::default_presenter_window_width")]
    window_width: u32,
    #[serde(default = "defaults::default_presenter_window_height")]
    window_height: u32,
    #[serde(default = "defaults::default_tick_interval_ms")]
    tick_interval_ms: u32,
    #[serde(default = "defaults::default_start_time_key")]
    start_time_key: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        PresenterConfig {
            window_name: defaults::default_presenter_window_name(),
            window_width: defaults::default_presenter_window_width(),
            window_height: defaults::default_presenter_window_height(),
            tick_interval_ms: defaults::default_tick_interval_ms(),
            start_time_key: defaults::default_start_time_key(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
