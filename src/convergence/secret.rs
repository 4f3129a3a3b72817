// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::Converger;
use crate::config::SourceSecret;
use crate::constants::RESOURCE_NAME;
use crate::error::{ClusterHelperError, Result};
use crate::kubernetes::get_if_exists;
use crate::resources::make_secret_copy;
use k8s_openapi::api::core::v1::Secret;
use kube::{api::PostParams, Api};
use tracing::{debug, info, instrument};

impl Converger {
    /// Copy the source secret into `namespace` if the copy is missing.
    ///
    /// The copy is never re-synced: once it exists it is left as is, even
    /// if the source has changed since.
    #[instrument(skip(self, source), fields(source = %format!("{}/{}", source.namespace, source.name)))]
    pub(crate) async fn ensure_secret(&self, namespace: &str, source: &SourceSecret) -> Result<bool> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);

        let existing = get_if_exists(&secrets, RESOURCE_NAME)
            .await
            .map_err(|source| ClusterHelperError::LookupError {
                kind: "secret",
                namespace: namespace.to_string(),
                name: RESOURCE_NAME.to_string(),
                source,
            })?;

        if existing.is_some() {
            debug!("Secret {}/{} already exists", namespace, RESOURCE_NAME);
            return Ok(false);
        }

        let source_secret = self.get_source_secret(source).await?;
        let secret = make_secret_copy(&source_secret, RESOURCE_NAME, namespace);
        secrets
            .create(&PostParams::default(), &secret)
            .await
            .map_err(|source| ClusterHelperError::CreateError {
                kind: "secret",
                namespace: namespace.to_string(),
                name: RESOURCE_NAME.to_string(),
                source,
            })?;

        info!(
            "Copied secret {}/{} to {}/{}",
            source.namespace, source.name, namespace, RESOURCE_NAME
        );
        Ok(true)
    }

    async fn get_source_secret(&self, source: &SourceSecret) -> Result<Secret> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), &source.namespace);

        get_if_exists(&secrets, &source.name)
            .await
            .map_err(|err| ClusterHelperError::LookupError {
                kind: "secret",
                namespace: source.namespace.clone(),
                name: source.name.clone(),
                source: err,
            })?
            .ok_or_else(|| ClusterHelperError::SourceSecretNotFound {
                namespace: source.namespace.clone(),
                name: source.name.clone(),
            })
    }
}
