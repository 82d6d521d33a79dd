// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feedback and variable projection.
//!
//! Pure functions deriving the human-facing representations of a
//! [`LightStatus`] snapshot: the ON/OFF text, the numeric brightness, a
//! text slider bar, and the color-coded button style. The instance
//! recomputes these synchronously after every state mutation and pushes
//! them to the host surface; nothing here is computed lazily on read.

use crate::state::LightStatus;
use crate::types::Brightness;

/// Width of the rendered brightness bar in track units.
const BAR_WIDTH: u32 = 12;

/// An RGB color for button styling.
///
/// # Examples
///
/// ```
/// use shellyr_lib::feedback::Rgb;
///
/// let amber = Rgb::new(255, 200, 0);
/// assert_eq!(amber.g, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// White, used for button text.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Dark gray background shown while the light is off.
    pub const OFF_BACKGROUND: Self = Self::new(40, 40, 40);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Style a host button should take on for the brightness feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Text to render on the button.
    pub text: String,
    /// Text color.
    pub color: Rgb,
    /// Background color.
    pub bgcolor: Rgb,
}

/// Variable values pushed to the host after every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableValues {
    /// `"ON"` or `"OFF"`.
    pub light_state: &'static str,
    /// Brightness percentage, 0-100.
    pub brightness: u8,
    /// Rendered slider bar, e.g. `🔅━━━━━●───────🔆 45%`.
    pub brightness_bar: String,
}

/// Projects the variable values for a status snapshot.
#[must_use]
pub fn project(status: &LightStatus) -> VariableValues {
    VariableValues {
        light_state: if status.is_on() { "ON" } else { "OFF" },
        brightness: status.brightness().value(),
        brightness_bar: render_bar(status.brightness()),
    }
}

/// Boolean feedback: whether the light is on.
#[must_use]
pub fn light_is_on(status: &LightStatus) -> bool {
    status.is_on()
}

/// Renders the text slider bar for a brightness level.
///
/// The bar is 12 units wide; the marker sits at
/// `round(brightness / 100 * 12)` filled units from the left, and the
/// literal percentage is appended.
///
/// # Examples
///
/// ```
/// use shellyr_lib::feedback::render_bar;
/// use shellyr_lib::types::Brightness;
///
/// let bar = render_bar(Brightness::new(45).unwrap());
/// assert_eq!(bar, "🔅━━━━━●───────🔆 45%");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_bar(level: Brightness) -> String {
    let pct = level.value();
    // No half-unit cases exist for integer percentages, so the rounding
    // mode cannot differ from the host's.
    let pos = (f64::from(pct) / 100.0 * f64::from(BAR_WIDTH)).round() as usize;
    let before = "━".repeat(pos);
    let after = "─".repeat(BAR_WIDTH as usize - pos);
    format!("🔅{before}●{after}🔆 {pct}%")
}

/// Computes the button style for the brightness feedback.
///
/// While on, the background shifts from a dim red-tinged green toward
/// full green as brightness rises and the text shows the percentage.
/// While off, the text reads `OFF` on a fixed dark background.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn button_style(status: &LightStatus) -> ButtonStyle {
    if status.is_on() {
        let f = f64::from(status.brightness().value()) / 100.0;
        ButtonStyle {
            text: format!("{}%", status.brightness().value()),
            color: Rgb::WHITE,
            bgcolor: Rgb::new(
                ((1.0 - f) * 30.0).round() as u8,
                (60.0 + f * 100.0).round() as u8,
                0,
            ),
        }
    } else {
        ButtonStyle {
            text: "OFF".to_string(),
            color: Rgb::WHITE,
            bgcolor: Rgb::OFF_BACKGROUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(value: u8) -> Brightness {
        Brightness::new(value).unwrap()
    }

    #[test]
    fn bar_fill_matches_rounded_position() {
        for pct in 0..=100u8 {
            let bar = render_bar(brightness(pct));
            let expected = (f64::from(pct) / 100.0 * 12.0).round() as usize;
            let filled = bar.chars().filter(|c| *c == '━').count();
            let empty = bar.chars().filter(|c| *c == '─').count();

            assert_eq!(filled, expected, "fill count for {pct}%");
            assert_eq!(filled + empty, 12, "track width for {pct}%");
            assert!(bar.ends_with(&format!(" {pct}%")), "suffix for {pct}%");
        }
    }

    #[test]
    fn bar_endpoints() {
        assert_eq!(render_bar(Brightness::MIN), "🔅●────────────🔆 0%");
        assert_eq!(render_bar(Brightness::MAX), "🔅━━━━━━━━━━━━●🔆 100%");
    }

    #[test]
    fn project_on_state() {
        let status = LightStatus::new(true, brightness(45));
        let values = project(&status);

        assert_eq!(values.light_state, "ON");
        assert_eq!(values.brightness, 45);
        assert_eq!(values.brightness_bar, "🔅━━━━━●───────🔆 45%");
    }

    #[test]
    fn project_off_state() {
        let values = project(&LightStatus::default());

        assert_eq!(values.light_state, "OFF");
        assert_eq!(values.brightness, 0);
        assert_eq!(values.brightness_bar, "🔅●────────────🔆 0%");
    }

    #[test]
    fn boolean_feedback_tracks_power() {
        assert!(light_is_on(&LightStatus::new(true, brightness(10))));
        assert!(!light_is_on(&LightStatus::default()));
    }

    #[test]
    fn style_off_is_fixed() {
        let style = button_style(&LightStatus::new(false, brightness(80)));
        assert_eq!(style.text, "OFF");
        assert_eq!(style.bgcolor, Rgb::OFF_BACKGROUND);
        assert_eq!(style.color, Rgb::WHITE);
    }

    #[test]
    fn style_on_interpolates_background() {
        let dim = button_style(&LightStatus::new(true, Brightness::MIN));
        assert_eq!(dim.text, "0%");
        assert_eq!(dim.bgcolor, Rgb::new(30, 60, 0));

        let mid = button_style(&LightStatus::new(true, brightness(50)));
        assert_eq!(mid.text, "50%");
        assert_eq!(mid.bgcolor, Rgb::new(15, 110, 0));

        let full = button_style(&LightStatus::new(true, Brightness::MAX));
        assert_eq!(full.text, "100%");
        assert_eq!(full.bgcolor, Rgb::new(0, 160, 0));
    }

    #[test]
    fn style_red_falls_green_rises_with_brightness() {
        let mut previous = button_style(&LightStatus::new(true, Brightness::MIN)).bgcolor;
        for pct in 1..=100u8 {
            let bg = button_style(&LightStatus::new(true, brightness(pct))).bgcolor;
            assert!(bg.r <= previous.r, "red must not rise at {pct}%");
            assert!(bg.g >= previous.g, "green must not fall at {pct}%");
            assert_eq!(bg.b, 0);
            previous = bg;
        }
    }
}
