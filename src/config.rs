// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instance configuration.
//!
//! One configuration is supplied by the host platform per session and is
//! immutable for that session's lifetime; reconfiguration replaces the
//! whole value (see [`DimmerInstance::config_updated`]).
//!
//! Range validation (port 1-65535, polling interval 0-60000 ms) is
//! declared on the host platform's configuration form and enforced there;
//! this crate takes the values as given.
//!
//! [`DimmerInstance::config_updated`]: crate::DimmerInstance::config_updated

use crate::profile::DeviceModel;

/// Configuration for one dimmer instance.
///
/// # Examples
///
/// ```
/// use shellyr_lib::InstanceConfig;
///
/// // Defaults match a factory-fresh Shelly on the local network
/// let config = InstanceConfig::new("192.168.1.100");
/// assert_eq!(config.port(), 80);
/// assert_eq!(config.polling_interval_ms(), 3000);
///
/// // With all options
/// let config = InstanceConfig::new("10.0.0.7")
///     .with_port(8080)
///     .with_model("shelly-dimmer-2")
///     .with_polling_interval_ms(1000);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    host: String,
    port: u16,
    model: String,
    polling_interval_ms: u64,
}

impl InstanceConfig {
    /// Default HTTP port for Shelly devices.
    pub const DEFAULT_PORT: u16 = 80;

    /// Default status polling interval in milliseconds.
    pub const DEFAULT_POLLING_INTERVAL_MS: u64 = 3000;

    /// Creates a configuration for the specified host with defaults.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Shelly device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            model: DeviceModel::DEFAULT.id().to_string(),
            polling_interval_ms: Self::DEFAULT_POLLING_INTERVAL_MS,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the device model identifier.
    ///
    /// Unrecognized identifiers are kept verbatim and resolve to the
    /// default model at lookup time.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the status polling interval. Zero disables polling.
    #[must_use]
    pub fn with_polling_interval_ms(mut self, interval_ms: u64) -> Self {
        self.polling_interval_ms = interval_ms;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the raw model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolves the configured model, falling back to the default.
    #[must_use]
    pub fn device_model(&self) -> DeviceModel {
        DeviceModel::resolve(&self.model)
    }

    /// Returns the polling interval in milliseconds.
    #[must_use]
    pub fn polling_interval_ms(&self) -> u64 {
        self.polling_interval_ms
    }
}
