//! Settings consumed by construction and conversion.

use std::sync::OnceLock;

use typecol_common::{Result, verify_arg};

/// Strings that are treated as null after trimming surrounding whitespace.
pub const DEFAULT_NULL_STRINGS: [&str; 5] = ["NaN", "n/a", "N/A", "", "nil"];

/// Payload carried by null string elements.
pub const DEFAULT_NULL_FILLER: &str = "NaN";

/// Minimum share of a dynamic sequence that must agree on a kind before the
/// sequence is interpolated as that kind.
pub const DEFAULT_INTERPOLATION_THRESHOLD: f64 = 0.80;

/// Number of leading elements inspected during interpolation.
pub const DEFAULT_INTERPOLATION_MAXIMUM: usize = 50;

/// Configuration threaded through the factory and the converters.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesConfig {
    /// Case-sensitive tokens recognized as null strings.
    pub null_strings: Vec<String>,
    /// Replacement payload for null strings and for nulls rendered as text.
    pub null_filler: String,
    /// Whether degraded constructions are reported through `log::warn!`.
    pub log_warnings: bool,
    /// Share in `(0, 1]` a kind must reach for interpolation to pick it.
    pub interpolation_threshold: f64,
    /// Upper bound on the elements sampled by interpolation.
    pub interpolation_maximum: usize,
}

impl Default for ValuesConfig {
    fn default() -> Self {
        Self {
            null_strings: DEFAULT_NULL_STRINGS.iter().map(|s| s.to_string()).collect(),
            null_filler: DEFAULT_NULL_FILLER.to_string(),
            log_warnings: true,
            interpolation_threshold: DEFAULT_INTERPOLATION_THRESHOLD,
            interpolation_maximum: DEFAULT_INTERPOLATION_MAXIMUM,
        }
    }
}

impl ValuesConfig {
    pub fn with_null_strings<I, S>(mut self, null_strings: I) -> ValuesConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_strings = null_strings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_null_filler(mut self, null_filler: impl Into<String>) -> ValuesConfig {
        self.null_filler = null_filler.into();
        self
    }

    pub fn with_log_warnings(mut self, log_warnings: bool) -> ValuesConfig {
        self.log_warnings = log_warnings;
        self
    }

    pub fn with_interpolation_threshold(mut self, threshold: f64) -> ValuesConfig {
        self.interpolation_threshold = threshold;
        self
    }

    pub fn with_interpolation_maximum(mut self, maximum: usize) -> ValuesConfig {
        self.interpolation_maximum = maximum;
        self
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.interpolation_threshold;
        verify_arg!(interpolation_threshold, threshold > 0.0 && threshold <= 1.0);
        verify_arg!(interpolation_maximum, self.interpolation_maximum > 0);
        Ok(())
    }

    /// Returns `true` if `s`, with surrounding whitespace removed, is one of
    /// the configured null tokens.
    pub fn is_null_string(&self, s: &str) -> bool {
        let s = s.trim();
        self.null_strings.iter().any(|token| token == s)
    }
}

static DEFAULT_CONFIG: OnceLock<ValuesConfig> = OnceLock::new();

/// Process-wide default configuration for callers that do not carry their own.
pub fn default_config() -> &'static ValuesConfig {
    DEFAULT_CONFIG.get_or_init(ValuesConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValuesConfig::default();
        assert_eq!(config.null_filler, "NaN");
        assert!(config.log_warnings);
        assert_eq!(config.interpolation_maximum, 50);
        assert!(config.validate().is_ok());
        assert_eq!(default_config(), &config);
    }

    #[test]
    fn test_null_strings() {
        let config = ValuesConfig::default();
        for s in ["NaN", "n/a", "N/A", "", "nil", "  ", " NaN "] {
            assert!(config.is_null_string(s), "{s:?}");
        }
        for s in ["nan", "NA", "0", "null", "None"] {
            assert!(!config.is_null_string(s), "{s:?}");
        }

        let config = config.with_null_strings(["null", "-"]);
        assert!(config.is_null_string("null"));
        assert!(config.is_null_string(" - "));
        assert!(!config.is_null_string("NaN"));
    }

    #[test]
    fn test_validate() {
        let config = ValuesConfig::default().with_interpolation_threshold(0.0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("interpolation_threshold"));

        assert!(
            ValuesConfig::default()
                .with_interpolation_threshold(1.0)
                .validate()
                .is_ok()
        );
        assert!(
            ValuesConfig::default()
                .with_interpolation_maximum(0)
                .validate()
                .is_err()
        );
    }
}
