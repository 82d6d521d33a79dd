// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Shelly RPC interface.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::command::RpcCommand;
use crate::config::InstanceConfig;
use crate::error::{Error, ParseError, ProtocolError};
use crate::surface::{ControlSurface, InstanceStatus};

/// Upper bound on one RPC round trip. Exceeding it cancels the in-flight
/// request.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the device's RPC interface.
///
/// Built once per configuration: the device profile (resolved from the
/// configured model, with the default fallback) fixes the RPC base path
/// and the light component id. Reconfiguration constructs a fresh client
/// rather than mutating this one.
///
/// On any failure the client logs the method and target, reports a
/// connection failure to the host surface, and propagates the error.
pub struct RpcClient {
    base_url: String,
    light_id: u8,
    client: Client,
    surface: Arc<dyn ControlSurface>,
}

impl RpcClient {
    /// Creates a client for the configured device.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn new(
        config: &InstanceConfig,
        surface: Arc<dyn ControlSurface>,
    ) -> Result<Self, ProtocolError> {
        let profile = config.device_model().profile();

        let client = Client::builder()
            .timeout(RPC_TIMEOUT)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            base_url: format!(
                "http://{}:{}{}",
                config.host(),
                config.port(),
                profile.rpc_path
            ),
            light_id: profile.light_id,
            client,
            surface,
        })
    }

    /// Returns the RPC base URL, e.g. `http://192.168.1.100:80/rpc`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the full URL for a command.
    fn build_url(&self, command: &impl RpcCommand) -> String {
        let mut url = format!("{}/{}?id={}", self.base_url, command.method(), self.light_id);
        for (key, value) in command.params() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
        url
    }

    /// Invokes an RPC method and returns the parsed JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Timeout` when the 5 s bound is exceeded,
    /// `ProtocolError::Http` for transport failures,
    /// `ProtocolError::Status` for non-2xx responses, and
    /// `ParseError::Json` for malformed bodies. Every failure is also
    /// reported to the host surface as a connection failure.
    pub async fn invoke<C: RpcCommand>(&self, command: &C) -> Result<serde_json::Value, Error> {
        let url = self.build_url(command);

        tracing::debug!(url = %url, "Sending RPC request");

        match self.dispatch(&url).await {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::error!(
                    method = command.method(),
                    url = %url,
                    error = %err,
                    "RPC call failed"
                );
                self.surface
                    .status_changed(InstanceStatus::ConnectionFailure(err.to_string()));
                Err(err)
            }
        }
    }

    async fn dispatch(&self, url: &str) -> Result<serde_json::Value, Error> {
        let response = self.client.get(url).send().await.map_err(wrap_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(wrap_reqwest)?;

        tracing::debug!(body = %body, "Received RPC response");

        serde_json::from_str(&body).map_err(|err| Error::Parse(ParseError::Json(err)))
    }
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("base_url", &self.base_url)
            .field("light_id", &self.light_id)
            .finish_non_exhaustive()
    }
}

/// Distinguishes timeouts from other transport failures.
#[allow(clippy::cast_possible_truncation)]
fn wrap_reqwest(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Protocol(ProtocolError::Timeout(RPC_TIMEOUT.as_millis() as u64))
    } else {
        Error::Protocol(ProtocolError::Http(err))
    }
}
