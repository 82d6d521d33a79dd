// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Shelly dimmer control.
//!
//! This module provides type-safe representations of values used in RPC
//! commands. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`DimStep`] - Relative dim increment for dim up/down (1-100%)

mod brightness;
mod step;

pub use brightness::Brightness;
pub use step::DimStep;
