// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the scene layer.
//!
//! The router itself has no error states: every stack, including an empty one,
//! has a defined result.

use alloc::string::String;

use crate::types::RegionId;

/// Misuse of a [`Scene`](crate::scene::Scene).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// The identifier does not belong to this scene.
    #[error("region {0:?} is not part of this scene")]
    UnknownRegion(RegionId),
    /// The region already carries a twin.
    #[error("region {0:?} already has a twin")]
    AlreadyTwinned(RegionId),
    /// The region is itself a twin and cannot be twinned.
    #[error("region {0:?} is a twin and cannot carry a twin of its own")]
    TwinOfTwin(RegionId),
    /// A region was asked to share an axis with itself.
    #[error("region {0:?} cannot share an axis with itself")]
    SelfShare(RegionId),
}

/// A capture override setting that is not `true`, `false` or `auto`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid capture override `{input}`, expected `true`, `false` or `auto`")]
pub struct ParseCaptureOverrideError {
    pub(crate) input: String,
}

impl ParseCaptureOverrideError {
    /// The rejected input, trimmed.
    pub fn input(&self) -> &str {
        &self.input
    }
}
