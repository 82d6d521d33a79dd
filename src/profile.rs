// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device model registry.
//!
//! Maps the user-selected model identifier to device-specific addressing
//! parameters. The registry is a closed set of variants so an unsupported
//! model cannot slip past the type system; unknown identifiers coming in
//! as configuration strings resolve to [`DeviceModel::DEFAULT`].

/// Supported Shelly dimmer models.
///
/// # Examples
///
/// ```
/// use shellyr_lib::DeviceModel;
///
/// let model = DeviceModel::resolve("shelly-dimmer-2");
/// assert_eq!(model, DeviceModel::Dimmer2);
///
/// // Unknown identifiers fall back to the default model
/// let fallback = DeviceModel::resolve("foo");
/// assert_eq!(fallback, DeviceModel::DEFAULT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceModel {
    /// Shelly DALI Dimmer Gen3.
    DaliDimmerGen3,
    /// Shelly Dimmer 2 (Gen1/Gen2).
    Dimmer2,
    /// Shelly Plus Dimmer 1PM (Gen3).
    PlusDimmer1Pm,
    /// Shelly Plus Dimmer 10V PM (Gen3).
    PlusDimmer10V,
}

impl DeviceModel {
    /// The model assumed when an identifier is unrecognized.
    pub const DEFAULT: Self = Self::DaliDimmerGen3;

    /// All supported models, in dropdown order.
    pub const ALL: [Self; 4] = [
        Self::DaliDimmerGen3,
        Self::Dimmer2,
        Self::PlusDimmer1Pm,
        Self::PlusDimmer10V,
    ];

    /// Looks up a model by its configuration identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "shelly-dali-dimmer-gen3" => Some(Self::DaliDimmerGen3),
            "shelly-dimmer-2" => Some(Self::Dimmer2),
            "shelly-plus-dimmer-1pm" => Some(Self::PlusDimmer1Pm),
            "shelly-plus-dimmer-10v" => Some(Self::PlusDimmer10V),
            _ => None,
        }
    }

    /// Resolves an identifier, falling back to [`Self::DEFAULT`].
    ///
    /// Total by construction: configuration strings never fail to resolve.
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::DEFAULT)
    }

    /// Returns the configuration identifier for this model.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::DaliDimmerGen3 => "shelly-dali-dimmer-gen3",
            Self::Dimmer2 => "shelly-dimmer-2",
            Self::PlusDimmer1Pm => "shelly-plus-dimmer-1pm",
            Self::PlusDimmer10V => "shelly-plus-dimmer-10v",
        }
    }

    /// Returns the addressing profile for this model.
    #[must_use]
    pub const fn profile(&self) -> DeviceProfile {
        match self {
            Self::DaliDimmerGen3 => DeviceProfile {
                label: "Shelly DALI Dimmer Gen3",
                light_id: 0,
                rpc_path: "/rpc",
            },
            Self::Dimmer2 => DeviceProfile {
                label: "Shelly Dimmer 2 (Gen1/Gen2)",
                light_id: 0,
                rpc_path: "/rpc",
            },
            Self::PlusDimmer1Pm => DeviceProfile {
                label: "Shelly Plus Dimmer 1PM (Gen3)",
                light_id: 0,
                rpc_path: "/rpc",
            },
            Self::PlusDimmer10V => DeviceProfile {
                label: "Shelly Plus Dimmer 10V PM (Gen3)",
                light_id: 0,
                rpc_path: "/rpc",
            },
        }
    }
}

/// Device-specific addressing parameters.
///
/// Constructed once from the static model table; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Human-readable model name.
    pub label: &'static str,
    /// Index of the light component commands target.
    pub light_id: u8,
    /// Base path of the RPC endpoint.
    pub rpc_path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_ids() {
        for model in DeviceModel::ALL {
            assert_eq!(DeviceModel::resolve(model.id()), model);
        }
    }

    #[test]
    fn resolve_unknown_id_falls_back() {
        assert_eq!(DeviceModel::resolve("foo"), DeviceModel::DEFAULT);
        assert_eq!(DeviceModel::resolve(""), DeviceModel::DEFAULT);
    }

    #[test]
    fn from_id_unknown_is_none() {
        assert!(DeviceModel::from_id("shelly-pro-4pm").is_none());
    }

    #[test]
    fn fallback_profile_matches_default() {
        let fallback = DeviceModel::resolve("foo").profile();
        let default = DeviceModel::DEFAULT.profile();
        assert_eq!(fallback.light_id, default.light_id);
        assert_eq!(fallback.rpc_path, default.rpc_path);
    }

    #[test]
    fn all_profiles_target_light_zero() {
        for model in DeviceModel::ALL {
            let profile = model.profile();
            assert_eq!(profile.light_id, 0);
            assert_eq!(profile.rpc_path, "/rpc");
            assert!(!profile.label.is_empty());
        }
    }
}
