// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cluster_helper::config::Config;
use cluster_helper::reconcilers::NamespaceReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting cluster-helper");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: injection_policy={:?}, cluster_role={}, source_secret={}",
        config.injection_policy,
        config.cluster_role.as_deref().unwrap_or("<none>"),
        config
            .source_secret
            .as_ref()
            .map(|s| format!("{}/{}", s.namespace, s.name))
            .unwrap_or_else(|| "<none>".to_string())
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    NamespaceReconciler::new(client, config).run().await
}
