// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelly RPC command definitions.
//!
//! This module provides typed representations of the RPC methods the
//! library invokes over HTTP GET.
//!
//! # Command Structure
//!
//! Each RPC command consists of:
//! - A method name (e.g., `Light.Set`)
//! - Query parameters (e.g., `on=true`, `brightness=75`)
//!
//! The targeted light component id is not part of the command; the RPC
//! client injects it from the device profile when building the request.
//!
//! # Examples
//!
//! ```
//! use shellyr_lib::command::{LightCommand, RpcCommand};
//!
//! let cmd = LightCommand::On;
//! assert_eq!(cmd.method(), "Light.Set");
//! assert_eq!(cmd.params(), vec![("on", "true".to_string())]);
//!
//! let query = LightCommand::GetStatus;
//! assert_eq!(query.method(), "Light.GetStatus");
//! assert!(query.params().is_empty());
//! ```

mod light;

pub use light::LightCommand;

/// A command that can be sent to a Shelly device.
///
/// Commands are serialized to an RPC method name plus query parameters
/// for transmission over HTTP GET.
pub trait RpcCommand {
    /// Returns the RPC method name, e.g. `"Light.Set"`.
    fn method(&self) -> &'static str;

    /// Returns the query parameters for this command.
    ///
    /// The pairs are appended after the `id` parameter in declaration
    /// order.
    fn params(&self) -> Vec<(&'static str, String)>;
}
