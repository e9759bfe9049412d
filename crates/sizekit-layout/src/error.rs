use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Misconfiguration of a breakpoint table or value map.
///
/// These are raised once, where the configuration is built or first used,
/// and are meant to be fixed by the caller rather than handled at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one size argument must be filled ({context})")]
    EmptyValues { context: &'static str },

    #[error("at least one breakpoint value must be provided for portrait or landscape")]
    EmptyOrientationValues,

    #[error("expected {expected} thresholds (one per category above the smallest), got {actual}")]
    ThresholdCount { expected: usize, actual: usize },

    #[error("threshold for {category} must be finite and non-negative, got {threshold}")]
    InvalidThreshold {
        category: &'static str,
        threshold: f64,
    },

    #[error(
        "thresholds must strictly decrease: {larger} ({larger_threshold}) must exceed {smaller} ({smaller_threshold})"
    )]
    NotDescending {
        larger: &'static str,
        larger_threshold: f64,
        smaller: &'static str,
        smaller_threshold: f64,
    },
}

impl ConfigError {
    #[must_use]
    pub fn empty(context: &'static str) -> Self {
        Self::EmptyValues { context }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn empty_values_names_the_context() {
        let error = ConfigError::empty("screen type layout");
        assert_eq!(
            error.to_string(),
            "at least one size argument must be filled (screen type layout)"
        );
    }

    #[test]
    fn not_descending_names_both_categories() {
        let error = ConfigError::NotDescending {
            larger: "large",
            larger_threshold: 500.0,
            smaller: "medium",
            smaller_threshold: 600.0,
        };
        let msg = error.to_string();
        assert!(msg.contains("large (500)"));
        assert!(msg.contains("medium (600)"));
    }
}
