// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::Converger;
use crate::constants::RESOURCE_NAME;
use crate::error::{ClusterHelperError, Result};
use crate::kubernetes::get_if_exists;
use crate::resources::make_role_binding;
use k8s_openapi::api::rbac::v1::RoleBinding;
use kube::{api::PostParams, Api};
use tracing::{debug, info, instrument};

impl Converger {
    /// Create the role binding if it is missing. An existing binding is
    /// never updated. Returns whether a create was issued.
    #[instrument(skip(self))]
    pub(crate) async fn ensure_role_binding(&self, namespace: &str, cluster_role: &str) -> Result<bool> {
        let role_bindings: Api<RoleBinding> = Api::namespaced(self.client.clone(), namespace);

        let existing = get_if_exists(&role_bindings, RESOURCE_NAME)
            .await
            .map_err(|source| ClusterHelperError::LookupError {
                kind: "rolebinding",
                namespace: namespace.to_string(),
                name: RESOURCE_NAME.to_string(),
                source,
            })?;

        if existing.is_some() {
            debug!("Role binding {}/{} already exists", namespace, RESOURCE_NAME);
            return Ok(false);
        }

        let role_binding = make_role_binding(RESOURCE_NAME, namespace, cluster_role);
        role_bindings
            .create(&PostParams::default(), &role_binding)
            .await
            .map_err(|source| ClusterHelperError::CreateError {
                kind: "rolebinding",
                namespace: namespace.to_string(),
                name: RESOURCE_NAME.to_string(),
                source,
            })?;

        info!(
            "Created role binding {}/{} for cluster role {}",
            namespace, RESOURCE_NAME, cluster_role
        );
        Ok(true)
    }
}
