// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmer instance: session context and action dispatch.
//!
//! One [`DimmerInstance`] exists per configured device endpoint. It owns
//! the configuration, the RPC client, the shared state snapshot, and the
//! poller; the host platform drives it through the lifecycle methods and
//! the action methods.
//!
//! Every action follows the same sequence: issue the RPC call, and only
//! on success apply the optimistic local update and push fresh
//! projections. A failed call leaves the snapshot untouched (the client
//! has already reported the failure). The next successful poll overwrites
//! optimistic values with authoritative ones; when a poll tick and an
//! action overlap, whichever write lands last wins.

use std::sync::Arc;
use std::time::Duration;

use crate::command::LightCommand;
use crate::config::InstanceConfig;
use crate::error::Result;
use crate::feedback;
use crate::poller::StatusPoller;
use crate::protocol::RpcClient;
use crate::state::{LightStatus, StateStore};
use crate::surface::{ControlSurface, Feedback, InstanceStatus};
use crate::types::{Brightness, DimStep};

/// One controlled dimmer endpoint.
///
/// # Examples
///
/// ```no_run
/// # async fn example(
/// #     surface: std::sync::Arc<dyn shellyr_lib::ControlSurface>,
/// # ) -> shellyr_lib::Result<()> {
/// use shellyr_lib::{DimmerInstance, InstanceConfig};
/// use shellyr_lib::types::{Brightness, DimStep};
///
/// let config = InstanceConfig::new("192.168.1.100");
/// let mut instance = DimmerInstance::new(config, surface)?;
/// instance.init();
///
/// instance.toggle().await?;
/// instance.set_brightness(Brightness::new(75)?).await?;
/// instance.dim_down(DimStep::DEFAULT).await?;
///
/// instance.destroy();
/// # Ok(())
/// # }
/// ```
pub struct DimmerInstance {
    config: InstanceConfig,
    client: Arc<RpcClient>,
    store: Arc<StateStore>,
    surface: Arc<dyn ControlSurface>,
    poller: StatusPoller,
}

impl DimmerInstance {
    /// Creates an instance for the given configuration.
    ///
    /// The state snapshot starts dark (`{off, 0}`) until the first
    /// successful poll or action.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC client cannot be created.
    pub fn new(config: InstanceConfig, surface: Arc<dyn ControlSurface>) -> Result<Self> {
        let client = Arc::new(RpcClient::new(&config, Arc::clone(&surface))?);

        Ok(Self {
            config,
            client,
            store: Arc::new(StateStore::new()),
            surface,
            poller: StatusPoller::new(),
        })
    }

    /// Brings the session up: reports a healthy status, pushes the
    /// initial projections, and starts polling.
    ///
    /// Must be called from within a tokio runtime.
    pub fn init(&mut self) {
        self.surface.status_changed(InstanceStatus::Ok);
        self.push_outputs(&Feedback::ALL);
        self.start_polling();
    }

    /// Applies a replacement configuration.
    ///
    /// The poller is stopped before anything else so no in-flight tick
    /// reads stale values, then the client is rebuilt from the new
    /// configuration and polling restarts on the new schedule. The timer
    /// is never adjusted in place.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC client cannot be rebuilt; polling stays
    /// stopped in that case.
    pub fn config_updated(&mut self, config: InstanceConfig) -> Result<()> {
        self.poller.stop();

        self.client = Arc::new(RpcClient::new(&config, Arc::clone(&self.surface))?);
        self.config = config;

        self.surface.status_changed(InstanceStatus::Ok);
        self.push_outputs(&Feedback::ALL);
        self.start_polling();
        Ok(())
    }

    /// Tears the session down, cancelling the poll schedule.
    pub fn destroy(&mut self) {
        self.poller.stop();
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    /// Returns the last-known light status.
    #[must_use]
    pub fn status(&self) -> LightStatus {
        self.store.get()
    }

    /// Returns `true` while the status poller is scheduled.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    // ========== Actions ==========

    /// Turns the light on.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC call fails; no state is mutated then.
    pub async fn light_on(&self) -> Result<()> {
        self.client.invoke(&LightCommand::On).await?;
        self.store.update(|s| s.set_on(true));
        self.push_outputs(&[Feedback::LightIsOn]);
        Ok(())
    }

    /// Turns the light off.
    ///
    /// The device keeps its remembered brightness, so only the power flag
    /// changes locally.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC call fails; no state is mutated then.
    pub async fn light_off(&self) -> Result<()> {
        self.client.invoke(&LightCommand::Off).await?;
        self.store.update(|s| s.set_on(false));
        self.push_outputs(&[Feedback::LightIsOn]);
        Ok(())
    }

    /// Toggles the light.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC call fails; no state is mutated then.
    pub async fn toggle(&self) -> Result<()> {
        self.client.invoke(&LightCommand::Toggle).await?;
        self.store.update(LightStatus::toggle);
        self.push_outputs(&[Feedback::LightIsOn]);
        Ok(())
    }

    /// Raises brightness by `step`, clamping at 100.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC call fails; no state is mutated then.
    pub async fn dim_up(&self, step: DimStep) -> Result<()> {
        self.client
            .invoke(&LightCommand::Offset(i16::from(step.value())))
            .await?;
        self.store
            .update(|s| s.set_brightness(s.brightness().saturating_add_step(step.value())));
        self.push_outputs(&[Feedback::BrightnessLevel]);
        Ok(())
    }

    /// Lowers brightness by `step`, clamping at 0.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC call fails; no state is mutated then.
    pub async fn dim_down(&self, step: DimStep) -> Result<()> {
        self.client
            .invoke(&LightCommand::Offset(-i16::from(step.value())))
            .await?;
        self.store
            .update(|s| s.set_brightness(s.brightness().saturating_sub_step(step.value())));
        self.push_outputs(&[Feedback::BrightnessLevel]);
        Ok(())
    }

    /// Sets an absolute brightness.
    ///
    /// A nonzero target also turns the light on, zero turns it off, on
    /// the device and in the optimistic update alike.
    ///
    /// # Errors
    ///
    /// Returns error if the RPC call fails; no state is mutated then.
    pub async fn set_brightness(&self, level: Brightness) -> Result<()> {
        self.client
            .invoke(&LightCommand::Brightness(level))
            .await?;
        self.store.update(|s| {
            s.set_brightness(level);
            s.set_on(!level.is_off());
        });
        self.push_outputs(&Feedback::ALL);
        Ok(())
    }

    // ========== Helpers ==========

    fn start_polling(&mut self) {
        self.poller.start(
            Duration::from_millis(self.config.polling_interval_ms()),
            Arc::clone(&self.client),
            Arc::clone(&self.store),
            Arc::clone(&self.surface),
        );
    }

    /// Recomputes projections from the current snapshot and pushes them.
    fn push_outputs(&self, feedbacks: &[Feedback]) {
        let status = self.store.get();
        self.surface.variables_changed(&feedback::project(&status));
        self.surface.feedbacks_invalidated(feedbacks);
    }
}

impl std::fmt::Debug for DimmerInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DimmerInstance")
            .field("config", &self.config)
            .field("client", &self.client)
            .field("status", &self.store.get())
            .field("polling", &self.poller.is_running())
            .finish_non_exhaustive()
    }
}
