// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control commands.

use crate::command::RpcCommand;
use crate::types::Brightness;

/// Commands for the device's light component.
///
/// # Examples
///
/// ```
/// use shellyr_lib::command::{LightCommand, RpcCommand};
/// use shellyr_lib::types::Brightness;
///
/// // Relative dim by -10%
/// let cmd = LightCommand::Offset(-10);
/// assert_eq!(cmd.method(), "Light.Set");
/// assert_eq!(cmd.params(), vec![("offset", "-10".to_string())]);
///
/// // Absolute brightness also drives the power flag
/// let cmd = LightCommand::Brightness(Brightness::new(75).unwrap());
/// assert_eq!(
///     cmd.params(),
///     vec![
///         ("brightness", "75".to_string()),
///         ("on", "true".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Turn the light on.
    On,
    /// Turn the light off.
    Off,
    /// Toggle the current power state.
    Toggle,
    /// Change brightness by a signed percentage offset.
    Offset(i16),
    /// Set an absolute brightness; a nonzero value also turns the light
    /// on, zero turns it off.
    Brightness(Brightness),
    /// Query the current light status.
    GetStatus,
}

impl RpcCommand for LightCommand {
    fn method(&self) -> &'static str {
        match self {
            Self::On | Self::Off | Self::Offset(_) | Self::Brightness(_) => "Light.Set",
            Self::Toggle => "Light.Toggle",
            Self::GetStatus => "Light.GetStatus",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::On => vec![("on", "true".to_string())],
            Self::Off => vec![("on", "false".to_string())],
            Self::Toggle | Self::GetStatus => Vec::new(),
            Self::Offset(delta) => vec![("offset", delta.to_string())],
            Self::Brightness(level) => vec![
                ("brightness", level.value().to_string()),
                ("on", (!level.is_off()).to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_off_params() {
        assert_eq!(LightCommand::On.method(), "Light.Set");
        assert_eq!(
            LightCommand::On.params(),
            vec![("on", "true".to_string())]
        );
        assert_eq!(
            LightCommand::Off.params(),
            vec![("on", "false".to_string())]
        );
    }

    #[test]
    fn toggle_has_no_params() {
        assert_eq!(LightCommand::Toggle.method(), "Light.Toggle");
        assert!(LightCommand::Toggle.params().is_empty());
    }

    #[test]
    fn offset_is_signed() {
        assert_eq!(
            LightCommand::Offset(10).params(),
            vec![("offset", "10".to_string())]
        );
        assert_eq!(
            LightCommand::Offset(-25).params(),
            vec![("offset", "-25".to_string())]
        );
    }

    #[test]
    fn brightness_couples_power_flag() {
        let cmd = LightCommand::Brightness(Brightness::new(40).unwrap());
        assert_eq!(
            cmd.params(),
            vec![
                ("brightness", "40".to_string()),
                ("on", "true".to_string()),
            ]
        );

        let cmd = LightCommand::Brightness(Brightness::MIN);
        assert_eq!(
            cmd.params(),
            vec![
                ("brightness", "0".to_string()),
                ("on", "false".to_string()),
            ]
        );
    }

    #[test]
    fn get_status_is_a_query() {
        assert_eq!(LightCommand::GetStatus.method(), "Light.GetStatus");
        assert!(LightCommand::GetStatus.params().is_empty());
    }
}
