// ---------------------------------------------------------------------------
// SettingsParseError: typed failures for streamed scene settings
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors produced while turning a raw streamed payload into `SceneSettings`.
///
/// A payload that fails here is reported and dropped; the active settings
/// stay as they were.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsParseError {
    /// Not valid JSON, or the JSON does not match the schema (unknown key,
    /// missing key, wrong type).
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },
    /// Well-formed payload whose field value is out of range.
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl SettingsParseError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsParseError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SettingsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsParseError::Malformed {
                line,
                column,
                message,
            } => write!(f, "Malformed settings at {line}:{column}: {message}"),
            SettingsParseError::InvalidField { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for SettingsParseError {}

impl From<serde_json::Error> for SettingsParseError {
    fn from(e: serde_json::Error) -> Self {
        SettingsParseError::Malformed {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_field() {
        let err = SettingsParseError::invalid("cloudOpacity", "must be within 0..=1, got 1.5");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'cloudOpacity': must be within 0..=1, got 1.5"
        );
    }

    #[test]
    fn test_from_serde_json_keeps_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ").unwrap_err();
        let err = SettingsParseError::from(json_err);
        match err {
            SettingsParseError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
