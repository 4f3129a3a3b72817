// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::Converger;
use crate::constants::{DEFAULT_SERVICE_ACCOUNT, RESOURCE_NAME};
use crate::error::{ClusterHelperError, Result};
use crate::kubernetes::{create_merge_patch, get_if_exists, is_empty_patch};
use k8s_openapi::api::core::v1::{LocalObjectReference, ServiceAccount};
use kube::{
    api::{Patch, PatchParams},
    Api,
};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

impl Converger {
    /// Make sure the default service account references our pull secret.
    /// Returns whether a patch was issued.
    #[instrument(skip(self))]
    pub(crate) async fn ensure_service_account(&self, namespace: &str) -> Result<bool> {
        let service_accounts: Api<ServiceAccount> =
            Api::namespaced(self.client.clone(), namespace);

        let service_account = get_if_exists(&service_accounts, DEFAULT_SERVICE_ACCOUNT)
            .await
            .map_err(|source| ClusterHelperError::LookupError {
                kind: "serviceaccount",
                namespace: namespace.to_string(),
                name: DEFAULT_SERVICE_ACCOUNT.to_string(),
                source,
            })?
            .ok_or_else(|| ClusterHelperError::ServiceAccountNotFound {
                namespace: namespace.to_string(),
                name: DEFAULT_SERVICE_ACCOUNT.to_string(),
            })?;

        let Some(patch) = image_pull_secret_patch(&service_account, RESOURCE_NAME)? else {
            debug!(
                "Service account {}/{} already references {}",
                namespace, DEFAULT_SERVICE_ACCOUNT, RESOURCE_NAME
            );
            return Ok(false);
        };

        info!("Patching {}/{}: {}", namespace, DEFAULT_SERVICE_ACCOUNT, patch);
        service_accounts
            .patch(
                DEFAULT_SERVICE_ACCOUNT,
                &PatchParams::default(),
                &Patch::Merge(&patch),
            )
            .await
            .map_err(|source| {
                warn!(
                    "Failed to patch {}/{}: {}",
                    namespace, DEFAULT_SERVICE_ACCOUNT, source
                );
                ClusterHelperError::PatchError {
                    namespace: namespace.to_string(),
                    name: DEFAULT_SERVICE_ACCOUNT.to_string(),
                    source,
                }
            })?;

        Ok(true)
    }
}

/// Check whether the service account already lists `secret_name` as an
/// image pull secret
pub fn has_image_pull_secret(service_account: &ServiceAccount, secret_name: &str) -> bool {
    service_account
        .image_pull_secrets
        .iter()
        .flatten()
        .any(|r| r.name == secret_name)
}

/// Build the merge patch appending `secret_name` to the image pull secrets
/// of `service_account`, or `None` when there is nothing to change.
///
/// The observed resource version is part of the patch so a concurrent
/// update makes the API server answer with a conflict.
pub fn image_pull_secret_patch(
    service_account: &ServiceAccount,
    secret_name: &str,
) -> Result<Option<Value>> {
    if has_image_pull_secret(service_account, secret_name) {
        return Ok(None);
    }

    let mut desired = service_account.clone();
    desired
        .image_pull_secrets
        .get_or_insert_with(Vec::new)
        .push(LocalObjectReference {
            name: secret_name.to_string(),
        });

    let mut patch = create_merge_patch(
        &serde_json::to_value(service_account)?,
        &serde_json::to_value(&desired)?,
    );
    if is_empty_patch(&patch) {
        return Ok(None);
    }

    if let Some(resource_version) = &service_account.metadata.resource_version {
        patch["metadata"]["resourceVersion"] = Value::String(resource_version.clone());
    }

    Ok(Some(patch))
}
