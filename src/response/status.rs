// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light status response parsing.

use serde::Deserialize;

use crate::state::LightStatus;
use crate::types::Brightness;

/// Response from `Light.GetStatus`.
///
/// The device returns JSON like:
/// `{"id":0, "output":true, "brightness":45.0, "source":"WS_in"}`.
///
/// Only `output` and `brightness` are consumed. `output` is treated as
/// boolean-ish (older firmware reports `1`/`"on"`), `brightness` defaults
/// to 0 when absent and may be fractional while a fade is running.
///
/// # Examples
///
/// ```
/// use shellyr_lib::response::LightStatusResponse;
///
/// let json = r#"{"output": true, "brightness": 45}"#;
/// let response: LightStatusResponse = serde_json::from_str(json).unwrap();
/// assert!(response.output());
/// assert_eq!(response.brightness().value(), 45);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LightStatusResponse {
    /// Whether the light output is energized.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    output: bool,

    /// Brightness percentage; absent on some responses.
    #[serde(default)]
    brightness: f64,
}

impl LightStatusResponse {
    /// Returns whether the light output is on.
    #[must_use]
    pub fn output(&self) -> bool {
        self.output
    }

    /// Returns the brightness, rounded and clamped into range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness(&self) -> Brightness {
        Brightness::clamped(self.brightness.round().clamp(0.0, 100.0) as u8)
    }

    /// Converts into the tracked state snapshot.
    #[must_use]
    pub fn to_status(&self) -> LightStatus {
        LightStatus::new(self.output(), self.brightness())
    }
}

impl From<LightStatusResponse> for LightStatus {
    fn from(response: LightStatusResponse) -> Self {
        response.to_status()
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

fn truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => {
            matches!(s.to_ascii_lowercase().as_str(), "true" | "on" | "1")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_typical_response() {
        let json = r#"{"id":0, "output":true, "brightness":45, "source":"WS_in"}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();

        assert!(response.output());
        assert_eq!(response.brightness().value(), 45);
    }

    #[test]
    fn missing_brightness_defaults_to_zero() {
        let json = r#"{"output": false}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();

        assert!(!response.output());
        assert_eq!(response.brightness().value(), 0);
    }

    #[test]
    fn missing_output_defaults_to_off() {
        let json = r#"{"brightness": 80}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();

        assert!(!response.output());
        assert_eq!(response.brightness().value(), 80);
    }

    #[test]
    fn numeric_output_is_truthy() {
        let json = r#"{"output": 1, "brightness": 10}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        assert!(response.output());

        let json = r#"{"output": 0, "brightness": 10}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        assert!(!response.output());
    }

    #[test]
    fn string_output_is_truthy() {
        for raw in ["\"true\"", "\"on\"", "\"1\"", "\"ON\""] {
            let json = format!("{{\"output\": {raw}}}");
            let response: LightStatusResponse = serde_json::from_str(&json).unwrap();
            assert!(response.output(), "{raw} should be truthy");
        }

        let json = r#"{"output": "off"}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        assert!(!response.output());
    }

    #[test]
    fn fractional_brightness_rounds() {
        let json = r#"{"output": true, "brightness": 74.6}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.brightness().value(), 75);
    }

    #[test]
    fn out_of_range_brightness_clamps() {
        let json = r#"{"output": true, "brightness": 250}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.brightness().value(), 100);

        let json = r#"{"output": true, "brightness": -3}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.brightness().value(), 0);
    }

    #[test]
    fn converts_into_status() {
        let json = r#"{"output": true, "brightness": 45}"#;
        let response: LightStatusResponse = serde_json::from_str(json).unwrap();
        let status: LightStatus = response.into();

        assert!(status.is_on());
        assert_eq!(status.brightness().value(), 45);
    }
}
