// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-namespace convergence of the cluster-helper resources.
//!
//! Every step is get-or-create: objects that already exist are never
//! updated, so running the converger again on an unchanged namespace issues
//! no writes. Steps run in order and the first failure aborts the rest;
//! writes made by earlier steps are kept.

mod role_binding;
mod secret;
mod service_account;

pub use service_account::{has_image_pull_secret, image_pull_secret_patch};

use crate::config::Config;
use crate::error::Result;
use crate::events::{Change, ReconcileOutcome, SkipReason};
use k8s_openapi::api::core::v1::Namespace;
use kube::{Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Brings a namespace to its desired state
pub struct Converger {
    client: Client,
    config: Config,
}

impl Converger {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[instrument(skip(self, namespace), fields(namespace = %namespace.name_any()))]
    pub async fn reconcile(&self, namespace: &Namespace) -> Result<ReconcileOutcome> {
        let name = namespace.name_any();

        if self.config.injection_policy.should_skip(namespace.labels()) {
            debug!("Not reconciling namespace {}", name);
            return Ok(ReconcileOutcome::Skipped {
                namespace: name,
                reason: SkipReason::Excluded,
            });
        }

        // Cleanup on deletion is left to namespace garbage collection
        if namespace.metadata.deletion_timestamp.is_some() {
            debug!("Namespace {} is terminating", name);
            return Ok(ReconcileOutcome::Skipped {
                namespace: name,
                reason: SkipReason::Terminating,
            });
        }

        let mut changes = Vec::new();

        if let Some(cluster_role) = self.config.cluster_role.as_deref() {
            if self.ensure_role_binding(&name, cluster_role).await? {
                changes.push(Change::CreatedRoleBinding);
            }
        }

        // The pull secret reference is only useful when there is a secret to point at
        if let Some(source) = &self.config.source_secret {
            if self.ensure_secret(&name, source).await? {
                changes.push(Change::CreatedSecret);
            }
            if self.ensure_service_account(&name).await? {
                changes.push(Change::PatchedServiceAccount);
            }
        }

        if changes.is_empty() {
            debug!("Namespace {} already up to date", name);
        } else {
            info!("Namespace {} reconciled: {:?}", name, changes);
        }

        Ok(ReconcileOutcome::Reconciled {
            namespace: name,
            changes,
        })
    }
}
