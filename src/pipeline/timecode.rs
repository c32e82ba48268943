//! Timecode parsing for `hours;minutes;seconds;fraction` strings
//!
//! Caption exports encode each cue boundary as four semicolon-separated
//! numbers. The fourth component is always scaled by 0.01, whatever its
//! digit count: `0;0;1;5` is 1.05 seconds and `0;0;0;500` is 5 seconds.

use thiserror::Error;

/// Scale applied to the fourth timecode component.
pub const FRACTION_SCALE: f64 = 0.01;

/// Names of the four timecode components, in order.
const COMPONENT_NAMES: [&str; 4] = ["hours", "minutes", "seconds", "fraction"];

/// Errors produced while parsing a timecode string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimecodeError {
    /// Fewer than four `;`-separated components were present.
    #[error("time parsing error ({input}): expected 4 ';'-separated components, found {found}")]
    MissingComponents { input: String, found: usize },

    /// A component was not a finite decimal number.
    #[error("time parsing error ({input}): {component} component '{value}' is not a number")]
    InvalidComponent {
        input: String,
        component: &'static str,
        value: String,
    },
}

impl TimecodeError {
    /// The timecode string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            TimecodeError::MissingComponents { input, .. } => input,
            TimecodeError::InvalidComponent { input, .. } => input,
        }
    }
}

/// Convert a timecode string into elapsed seconds.
///
/// Computes `hours*3600 + minutes*60 + seconds + fraction*0.01`. Components
/// past the fourth are ignored and no range checks are applied.
pub fn parse_timecode(input: &str) -> Result<f64, TimecodeError> {
    let parts: Vec<&str> = input.split(';').collect();
    if parts.len() < COMPONENT_NAMES.len() {
        return Err(TimecodeError::MissingComponents {
            input: input.to_string(),
            found: parts.len(),
        });
    }

    let mut values = [0.0f64; 4];
    for (idx, component) in COMPONENT_NAMES.iter().copied().enumerate() {
        values[idx] = parse_component(input, parts[idx], component)?;
    }

    let [hours, minutes, seconds, fraction] = values;
    Ok(hours * 3600.0 + minutes * 60.0 + seconds + fraction * FRACTION_SCALE)
}

fn parse_component(input: &str, part: &str, component: &'static str) -> Result<f64, TimecodeError> {
    let trimmed = part.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TimecodeError::InvalidComponent {
            input: input.to_string(),
            component,
            value: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_trims_whitespace() {
        assert_eq!(parse_component("x", " 12 ", "hours").unwrap(), 12.0);
    }

    #[test]
    fn test_parse_component_rejects_non_finite() {
        for value in ["inf", "NaN", "-infinity"] {
            let err = parse_component("x", value, "seconds").unwrap_err();
            assert!(matches!(err, TimecodeError::InvalidComponent { component: "seconds", .. }));
        }
    }
}
