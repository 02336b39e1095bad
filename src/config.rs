use std::time::Duration;

const DEFAULT_THEME_KEY: &str = "theme";
const DEFAULT_TILT_MAX_DEGREES: f64 = 12.0;
const DEFAULT_TRANSITION_DELAY_MS: u64 = 10;
const DEFAULT_REVEAL_THRESHOLD_RATIO: f64 = 0.75;
const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
const DEFAULT_MOBILE_NAV_OFFSET_PX: f64 = 100.0;
const DEFAULT_DESKTOP_NAV_OFFSET_PX: f64 = 120.0;
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

const TILT_MAX_DEGREES_BOUNDS: (f64, f64) = (1.0, 45.0);
const TRANSITION_DELAY_MS_BOUNDS: (u64, u64) = (0, 1_000);

/// Settings handed to the view root. Build-time environment variables may
/// override the tunable ones; anything unparseable or out of bounds keeps the
/// default.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme_key: String,
    pub tilt_max_degrees: f64,
    pub transition_delay: Duration,
    pub reveal_threshold_ratio: f64,
    pub scrolled_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub mobile_nav_offset_px: f64,
    pub desktop_nav_offset_px: f64,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            tilt_max_degrees: DEFAULT_TILT_MAX_DEGREES,
            transition_delay: Duration::from_millis(DEFAULT_TRANSITION_DELAY_MS),
            reveal_threshold_ratio: DEFAULT_REVEAL_THRESHOLD_RATIO,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            mobile_nav_offset_px: DEFAULT_MOBILE_NAV_OFFSET_PX,
            desktop_nav_offset_px: DEFAULT_DESKTOP_NAV_OFFSET_PX,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOLIO_THEME_KEY"),
            option_env!("FOLIO_TILT_MAX_DEGREES"),
            option_env!("FOLIO_TRANSITION_DELAY_MS"),
            option_env!("FOLIO_LOG_LEVEL"),
        )
    }

    fn from_values(
        theme_key: Option<&str>,
        tilt_max_degrees: Option<&str>,
        transition_delay_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let transition_delay_ms = parse_u64_with_bounds(
            transition_delay_ms,
            DEFAULT_TRANSITION_DELAY_MS,
            TRANSITION_DELAY_MS_BOUNDS,
        );

        Self {
            theme_key: parse_non_empty_string(theme_key).unwrap_or(defaults.theme_key),
            tilt_max_degrees: parse_f64_with_bounds(
                tilt_max_degrees,
                DEFAULT_TILT_MAX_DEGREES,
                TILT_MAX_DEGREES_BOUNDS,
            ),
            transition_delay: Duration::from_millis(transition_delay_ms),
            log_level: parse_log_level(log_level, DEFAULT_LOG_LEVEL),
            ..defaults
        }
    }
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(raw: Option<&str>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(raw: Option<&str>, default: log::Level) -> log::Level {
    parse_non_empty_string(raw)
        .and_then(|value| value.parse::<log::Level>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_keep_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config =
            AppConfig::from_values(Some(" folio-theme "), Some("20"), Some("250"), Some("debug"));

        assert_eq!(config.theme_key, "folio-theme");
        assert_eq!(config.tilt_max_degrees, 20.0);
        assert_eq!(config.transition_delay, Duration::from_millis(250));
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn out_of_bounds_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("90"), Some("5000"), Some("loud"));

        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
        assert_eq!(config.tilt_max_degrees, DEFAULT_TILT_MAX_DEGREES);
        assert_eq!(
            config.transition_delay,
            Duration::from_millis(DEFAULT_TRANSITION_DELAY_MS)
        );
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn non_numeric_tilt_falls_back() {
        assert_eq!(
            parse_f64_with_bounds(Some("steep"), 12.0, TILT_MAX_DEGREES_BOUNDS),
            12.0
        );
        assert_eq!(
            parse_f64_with_bounds(Some("NaN"), 12.0, TILT_MAX_DEGREES_BOUNDS),
            12.0
        );
    }
}
