// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use parking_lot::RwLock;

use super::LightStatus;

/// Shared holder of the session's [`LightStatus`] snapshot.
///
/// The poller replaces the value wholesale with authoritative device
/// state; actions apply optimistic in-place updates. Writers never hold
/// the lock across an await point, so a poll tick overlapping an action
/// resolves to whichever write lands last.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RwLock<LightStatus>,
}

impl StateStore {
    /// Creates a store holding the initial `{off, 0}` snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current snapshot.
    #[must_use]
    pub fn get(&self) -> LightStatus {
        *self.inner.read()
    }

    /// Replaces the snapshot wholesale.
    pub fn set(&self, status: LightStatus) {
        *self.inner.write() = status;
    }

    /// Applies an in-place update to the snapshot.
    pub fn update(&self, f: impl FnOnce(&mut LightStatus)) {
        let mut guard = self.inner.write();
        f(&mut guard);
    }
}
