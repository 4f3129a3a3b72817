// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace reconciler - watches namespaces and the objects we create in
//! them, and converges each namespace on change.

use crate::config::Config;
use crate::constants::{labels, requeue, DEFAULT_SERVICE_ACCOUNT, OPERATOR_NAME};
use crate::convergence::Converger;
use crate::error::{ClusterHelperError, Result};
use crate::events;
use crate::resources::is_managed;
use futures::StreamExt;
use k8s_openapi::api::core::v1::{Namespace, Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::RoleBinding;
use kube::{
    runtime::{
        controller::Action,
        events::{Recorder, Reporter},
        reflector::ObjectRef,
        Controller,
    },
    Api, Client, Resource, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct NamespaceReconciler {
    client: Client,
    converger: Converger,
    recorder: Recorder,
}

impl NamespaceReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        let reporter = Reporter {
            controller: OPERATOR_NAME.to_string(),
            instance: None,
        };
        Self {
            recorder: Recorder::new(client.clone(), reporter),
            converger: Converger::new(client.clone(), config),
            client,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let secrets: Api<Secret> = Api::all(self.client.clone());
        let role_bindings: Api<RoleBinding> = Api::all(self.client.clone());
        let service_accounts: Api<ServiceAccount> = Api::all(self.client.clone());

        let managed = WatcherConfig::default().labels(&managed_selector());
        let default_service_account =
            WatcherConfig::default().fields(&format!("metadata.name={}", DEFAULT_SERVICE_ACCOUNT));

        let context = Arc::new(self);

        info!("Setting up watches");

        Controller::new(namespaces, WatcherConfig::default())
            .watches(secrets, managed.clone(), managed_namespace_of)
            .watches(role_bindings, managed, managed_namespace_of)
            .watches(service_accounts, default_service_account, namespace_of)
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled namespace: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        info!("Namespace reconciler stopped");
        Ok(())
    }
}

fn managed_selector() -> String {
    format!("{}={}", labels::MANAGED, labels::MANAGED_VALUE)
}

/// Map a namespaced object to the namespace it lives in
fn namespace_of<K: Resource>(object: K) -> Option<ObjectRef<Namespace>> {
    object.namespace().map(|ns| ObjectRef::new(&ns))
}

/// Like `namespace_of`, but only for objects carrying our managed label
fn managed_namespace_of<K: Resource>(object: K) -> Option<ObjectRef<Namespace>> {
    if is_managed(object.labels()) {
        namespace_of(object)
    } else {
        None
    }
}

async fn reconcile(namespace: Arc<Namespace>, ctx: Arc<NamespaceReconciler>) -> Result<Action> {
    let outcome = ctx.converger.reconcile(&namespace).await?;

    match outcome.event() {
        Some(event) => {
            let reference = namespace.object_ref(&());
            events::publish(&ctx.recorder, &reference, &event).await;
        }
        None => debug!("Namespace {} skipped, no event recorded", outcome.namespace()),
    }

    // The watches bring us back when something changes
    Ok(Action::await_change())
}

fn error_policy(
    namespace: Arc<Namespace>,
    error: &ClusterHelperError,
    ctx: Arc<NamespaceReconciler>,
) -> Action {
    error!("Reconciliation of namespace {} failed: {}", namespace.name_any(), error);
    Action::requeue(retry_delay(error, ctx.converger.config()))
}

fn retry_delay(error: &ClusterHelperError, config: &Config) -> Duration {
    if error.is_misconfiguration() {
        Duration::from_secs(requeue::MISCONFIGURATION_SECS)
    } else {
        config.retry_interval
    }
}
