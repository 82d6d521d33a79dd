// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic status polling.
//!
//! The poller is the authoritative writer of the shared state: each tick
//! fetches `Light.GetStatus`, replaces the snapshot wholesale, and pushes
//! fresh projections to the host. A failed tick changes nothing and the
//! schedule continues; the RPC client has already logged and reported the
//! failure.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::command::LightCommand;
use crate::feedback;
use crate::protocol::RpcClient;
use crate::response::LightStatusResponse;
use crate::state::StateStore;
use crate::surface::{ControlSurface, Feedback, InstanceStatus};

/// Owned handle to the spawned poll task.
///
/// Exists only while polling is active; aborting it is the only way the
/// task ends. The 5 s timeout on an in-flight status request is an
/// independent cancellation scope, so aborting the task does not recall a
/// request already on the wire.
#[derive(Debug)]
struct PollHandle {
    task: JoinHandle<()>,
}

/// Cancellable periodic status fetcher.
///
/// State machine: stopped → [`start`](Self::start) → running →
/// [`stop`](Self::stop) → stopped. Reconfiguration must always go through
/// stop-then-start; the running ticker is never adjusted in place.
#[derive(Debug, Default)]
pub struct StatusPoller {
    handle: Option<PollHandle>,
}

impl StatusPoller {
    /// Creates a poller in the stopped state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a poll task is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts polling at the given interval.
    ///
    /// A zero interval disables polling and leaves the poller stopped.
    /// Any previously running task is stopped first. The first poll fires
    /// one full interval after this call, subsequent polls keep the fixed
    /// schedule (a tick delayed by a slow response does not burst).
    pub fn start(
        &mut self,
        interval: Duration,
        client: Arc<RpcClient>,
        store: Arc<StateStore>,
        surface: Arc<dyn ControlSurface>,
    ) {
        self.stop();

        if interval.is_zero() {
            return;
        }

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval resolves immediately;
            // consume it so the schedule starts one period from now.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                poll_once(&client, &store, surface.as_ref()).await;
            }
        });

        self.handle = Some(PollHandle { task });
    }

    /// Stops polling. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.task.abort();
        }
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One tick: fetch, reconcile, project.
async fn poll_once(client: &RpcClient, store: &StateStore, surface: &dyn ControlSurface) {
    let Ok(value) = client.invoke(&LightCommand::GetStatus).await else {
        // Already logged and reported by the client; state stays as-is.
        return;
    };

    let status = match serde_json::from_value::<LightStatusResponse>(value) {
        Ok(response) => response.to_status(),
        Err(err) => {
            tracing::warn!(error = %err, "Discarding malformed status payload");
            return;
        }
    };

    store.set(status);
    surface.status_changed(InstanceStatus::Ok);
    surface.variables_changed(&feedback::project(&status));
    surface.feedbacks_invalidated(&Feedback::ALL);
}
