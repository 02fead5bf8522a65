// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Allocation counters reported by [`crate::Scene::stats`].

/// Monotonic counters of node creation and destruction.
///
/// Hosts diff two snapshots to see how many nodes a single update pass
/// allocated or freed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Nodes created since the scene was constructed.
    pub created: u64,
    /// Nodes destroyed since the scene was constructed.
    pub destroyed: u64,
}

impl SceneStats {
    /// Number of nodes currently alive.
    #[must_use]
    pub const fn alive(&self) -> u64 {
        self.created - self.destroyed
    }

    /// Counters accumulated since `earlier`.
    #[must_use]
    pub const fn since(&self, earlier: Self) -> Self {
        Self {
            created: self.created - earlier.created,
            destroyed: self.destroyed - earlier.destroyed,
        }
    }
}
