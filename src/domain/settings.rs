// Per-series display settings and their pure update transition
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chart;

pub const DEFAULT_COLOR: &str = "#6E59A5";

/// A user-set Y-axis bound: either derived from the data or fixed verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Auto,
    Fixed(f64),
}

impl Bound {
    /// Parses the "auto"-or-number user encoding. Anything unparseable
    /// resolves to `Auto`.
    pub fn parse(raw: &str) -> Bound {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Bound::Auto;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Bound::Fixed(value),
            _ => Bound::Auto,
        }
    }

    pub fn is_valid_encoding(raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.eq_ignore_ascii_case("auto")
            || trimmed.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
    }
}

impl Serialize for Bound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Bound::Auto => serializer.serialize_str("auto"),
            Bound::Fixed(value) => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplaySettings {
    pub title: String,
    pub color: String,
    pub y_min: Bound,
    pub y_max: Bound,
    pub show_points: bool,
    pub window_start: usize,
    pub window_end: usize,
}

impl DisplaySettings {
    pub fn for_series(description: &str, len: usize) -> Self {
        Self {
            title: description.to_string(),
            color: DEFAULT_COLOR.to_string(),
            y_min: Bound::Auto,
            y_max: Bound::Auto,
            show_points: false,
            window_start: 0,
            window_end: len.saturating_sub(1),
        }
    }

    /// Builds the settings value that results from applying `update`.
    /// The window is clamped against the series length, so the
    /// `window_start <= window_end <= len - 1` invariant holds afterwards.
    pub fn apply(&self, update: &SettingsUpdate, len: usize) -> DisplaySettings {
        let mut next = self.clone();
        if let Some(title) = &update.title {
            next.title = title.clone();
        }
        if let Some(color) = &update.color {
            next.color = color.clone();
        }
        if let Some(raw) = &update.y_min {
            next.y_min = Bound::parse(raw);
        }
        if let Some(raw) = &update.y_max {
            next.y_max = Bound::parse(raw);
        }
        if let Some(show_points) = update.show_points {
            next.show_points = show_points;
        }
        let start = update.window_start.unwrap_or(next.window_start as i64);
        let end = update.window_end.unwrap_or(next.window_end as i64);
        match chart::clamp_window(len, start, end) {
            Some((start, end)) => {
                next.window_start = start;
                next.window_end = end;
            }
            None => {
                next.window_start = 0;
                next.window_end = 0;
            }
        }
        next
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub title: Option<String>,
    pub color: Option<String>,
    pub y_min: Option<String>,
    pub y_max: Option<String>,
    pub show_points: Option<bool>,
    pub window_start: Option<i64>,
    pub window_end: Option<i64>,
}

impl SettingsUpdate {
    /// Rejects updates that carry a malformed color or bound encoding.
    /// Rejected updates must not mutate any stored settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(color) = &self.color {
            if !is_hex_color(color) {
                return Err(SettingsError::InvalidColor(color.clone()));
            }
        }
        for raw in [&self.y_min, &self.y_max].into_iter().flatten() {
            if !Bound::is_valid_encoding(raw) {
                return Err(SettingsError::InvalidBound(raw.clone()));
            }
        }
        Ok(())
    }
}

fn is_hex_color(raw: &str) -> bool {
    match raw.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid bound value: {0}")]
    InvalidBound(String),
    #[error("invalid color value: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_parse() {
        assert_eq!(Bound::parse("auto"), Bound::Auto);
        assert_eq!(Bound::parse(" AUTO "), Bound::Auto);
        assert_eq!(Bound::parse("10"), Bound::Fixed(10.0));
        assert_eq!(Bound::parse("-2.5"), Bound::Fixed(-2.5));
        assert_eq!(Bound::parse("abc"), Bound::Auto);
        assert_eq!(Bound::parse("NaN"), Bound::Auto);
        assert_eq!(Bound::parse(""), Bound::Auto);
    }

    #[test]
    fn test_bound_encoding_validation() {
        assert!(Bound::is_valid_encoding("auto"));
        assert!(Bound::is_valid_encoding("3.25"));
        assert!(!Bound::is_valid_encoding("three"));
        assert!(!Bound::is_valid_encoding("inf"));
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_hex_color("#6E59A5"));
        assert!(is_hex_color("#aabbcc"));
        assert!(!is_hex_color("6E59A5"));
        assert!(!is_hex_color("#6E59A"));
        assert!(!is_hex_color("#6E59AZ"));
    }

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::for_series("Housing Starts", 10);
        assert_eq!(settings.title, "Housing Starts");
        assert_eq!(settings.color, DEFAULT_COLOR);
        assert_eq!(settings.y_min, Bound::Auto);
        assert_eq!(settings.y_max, Bound::Auto);
        assert!(!settings.show_points);
        assert_eq!((settings.window_start, settings.window_end), (0, 9));
    }

    #[test]
    fn test_apply_is_pure_and_partial() {
        let settings = DisplaySettings::for_series("Housing Starts", 10);
        let update = SettingsUpdate {
            color: Some("#112233".to_string()),
            y_max: Some("42".to_string()),
            ..SettingsUpdate::default()
        };
        let next = settings.apply(&update, 10);
        assert_eq!(next.color, "#112233");
        assert_eq!(next.y_max, Bound::Fixed(42.0));
        // untouched fields carry over
        assert_eq!(next.title, settings.title);
        assert_eq!(next.y_min, Bound::Auto);
        // the original value is unchanged
        assert_eq!(settings.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_apply_clamps_window() {
        let settings = DisplaySettings::for_series("Housing Starts", 10);
        let update = SettingsUpdate {
            window_start: Some(-4),
            window_end: Some(99),
            ..SettingsUpdate::default()
        };
        let next = settings.apply(&update, 10);
        assert_eq!((next.window_start, next.window_end), (0, 9));

        let inverted = SettingsUpdate {
            window_start: Some(7),
            window_end: Some(3),
            ..SettingsUpdate::default()
        };
        let next = settings.apply(&inverted, 10);
        assert_eq!((next.window_start, next.window_end), (7, 7));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let bad_color = SettingsUpdate {
            color: Some("purple".to_string()),
            ..SettingsUpdate::default()
        };
        assert!(matches!(
            bad_color.validate(),
            Err(SettingsError::InvalidColor(_))
        ));

        let bad_bound = SettingsUpdate {
            y_min: Some("lots".to_string()),
            ..SettingsUpdate::default()
        };
        assert!(matches!(
            bad_bound.validate(),
            Err(SettingsError::InvalidBound(_))
        ));

        assert!(SettingsUpdate::default().validate().is_ok());
    }
}
