// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterHelperError {
    #[error("Failed to get {kind} {namespace}/{name}: {source}")]
    LookupError {
        kind: &'static str,
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to create {kind} {namespace}/{name}: {source}")]
    CreateError {
        kind: &'static str,
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to patch service account {namespace}/{name}: {source}")]
    PatchError {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Source secret {namespace}/{name} not found")]
    SourceSecretNotFound { namespace: String, name: String },

    #[error("Service account {namespace}/{name} not found")]
    ServiceAccountNotFound { namespace: String, name: String },

    #[error("Failed to build patch: {0}")]
    PatchBuildError(#[from] serde_json::Error),
}

impl ClusterHelperError {
    /// Errors that will not go away by retrying until an operator steps in
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            ClusterHelperError::SourceSecretNotFound { .. }
                | ClusterHelperError::ServiceAccountNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClusterHelperError>;
