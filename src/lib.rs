// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ShellyR` Lib - A Rust library to drive Shelly dimmers from button
//! control surfaces.
//!
//! This library implements the device side of a control-surface
//! integration for Shelly dimmer devices: it issues RPC commands over
//! HTTP, keeps a local status snapshot in sync through periodic polling,
//! and projects that snapshot into the variables and feedbacks a host
//! platform renders on its buttons.
//!
//! # Supported Features
//!
//! - **Light control**: On, off, toggle, relative dim steps, absolute
//!   brightness
//! - **Status polling**: Cancellable periodic `Light.GetStatus` fetches
//!   with optimistic updates in between
//! - **Projections**: ON/OFF text, numeric brightness, a text slider
//!   bar, and a color-coded button style
//!
//! # Supported Models
//!
//! Shelly DALI Dimmer Gen3 (default), Shelly Dimmer 2, Shelly Plus
//! Dimmer 1PM, Shelly Plus Dimmer 10V PM. Unknown model identifiers fall
//! back to the default profile.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shellyr_lib::feedback::VariableValues;
//! use shellyr_lib::types::DimStep;
//! use shellyr_lib::{
//!     ControlSurface, DimmerInstance, Feedback, InstanceConfig, InstanceStatus,
//! };
//!
//! // The host platform implements the capability surface; a unit stub
//! // is enough to drive a device directly.
//! struct Stub;
//!
//! impl ControlSurface for Stub {
//!     fn status_changed(&self, _status: InstanceStatus) {}
//!     fn variables_changed(&self, _values: &VariableValues) {}
//!     fn feedbacks_invalidated(&self, _feedbacks: &[Feedback]) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> shellyr_lib::Result<()> {
//!     let config = InstanceConfig::new("192.168.1.100");
//!     let mut instance = DimmerInstance::new(config, Arc::new(Stub))?;
//!     instance.init();
//!
//!     instance.toggle().await?;
//!     instance.dim_up(DimStep::DEFAULT).await?;
//!
//!     instance.destroy();
//!     Ok(())
//! }
//! ```

pub mod command;
mod config;
pub mod error;
pub mod feedback;
mod instance;
mod poller;
mod profile;
pub mod protocol;
pub mod response;
pub mod state;
mod surface;
pub mod types;

pub use command::{LightCommand, RpcCommand};
pub use config::InstanceConfig;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use feedback::{ButtonStyle, Rgb, VariableValues};
pub use instance::DimmerInstance;
pub use poller::StatusPoller;
pub use profile::{DeviceModel, DeviceProfile};
pub use protocol::{RPC_TIMEOUT, RpcClient};
pub use response::LightStatusResponse;
pub use state::{LightStatus, StateStore};
pub use surface::{ControlSurface, Feedback, InstanceStatus};
pub use types::{Brightness, DimStep};
