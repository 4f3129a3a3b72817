// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconciliation outcomes and the Kubernetes events they produce.
//!
//! Events are fire-and-forget: a failure to publish is logged and never
//! fails the reconciliation it describes.

use crate::constants::events::{ACTION_RECONCILE, REASON_RECONCILED};
use k8s_openapi::api::core::v1::ObjectReference;
use kube::runtime::events::{Event, EventType, Recorder};
use tracing::warn;

/// Why a namespace was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Filtered out by the injection policy
    Excluded,
    /// The namespace is being deleted
    Terminating,
}

/// A mutation issued while converging a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    CreatedRoleBinding,
    CreatedSecret,
    PatchedServiceAccount,
}

/// Terminal result of a successful reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Skipped {
        namespace: String,
        reason: SkipReason,
    },
    Reconciled {
        namespace: String,
        changes: Vec<Change>,
    },
}

impl ReconcileOutcome {
    pub fn namespace(&self) -> &str {
        match self {
            ReconcileOutcome::Skipped { namespace, .. } => namespace,
            ReconcileOutcome::Reconciled { namespace, .. } => namespace,
        }
    }

    /// Mutations issued, empty when nothing had to change
    pub fn changes(&self) -> &[Change] {
        match self {
            ReconcileOutcome::Skipped { .. } => &[],
            ReconcileOutcome::Reconciled { changes, .. } => changes,
        }
    }

    /// The event to record for this outcome. Skips are not recorded.
    pub fn event(&self) -> Option<ReconcileEvent> {
        match self {
            ReconcileOutcome::Skipped { .. } => None,
            ReconcileOutcome::Reconciled { namespace, .. } => {
                Some(ReconcileEvent::namespace_reconciled("", namespace))
            }
        }
    }
}

/// A Kubernetes event describing a reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileEvent {
    pub type_: EventType,
    pub reason: &'static str,
    pub message: String,
}

impl ReconcileEvent {
    /// Namespaces are cluster scoped, so `namespace` is normally empty
    pub fn namespace_reconciled(namespace: &str, name: &str) -> Self {
        Self {
            type_: EventType::Normal,
            reason: REASON_RECONCILED,
            message: format!(
                "Namespace reconciled by ClusterHelper: \"{}/{}\"",
                namespace, name
            ),
        }
    }

    fn to_kube_event(&self) -> Event {
        Event {
            type_: self.type_,
            reason: self.reason.to_string(),
            note: Some(self.message.clone()),
            action: ACTION_RECONCILE.to_string(),
            secondary: None,
        }
    }
}

/// Publish `event` on the object `reference` points at
pub async fn publish(recorder: &Recorder, reference: &ObjectReference, event: &ReconcileEvent) {
    if let Err(e) = recorder.publish(&event.to_kube_event(), reference).await {
        warn!(
            reason = event.reason,
            error = %e,
            "Failed to publish Kubernetes event"
        );
    }
}
