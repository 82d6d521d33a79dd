// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RPC protocol implementation.
//!
//! Shelly Gen3 devices expose their RPC interface over plain HTTP GET:
//! `http://{host}:{port}{rpc_path}/{method}?id={light_id}&{params}`,
//! answering with a JSON body. [`RpcClient`] is the single
//! network-facing primitive in this crate; every other component calls
//! through it.

mod http;

pub use http::{RPC_TIMEOUT, RpcClient};
