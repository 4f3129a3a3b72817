// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name shared by every object cluster-helper creates in a namespace
pub const RESOURCE_NAME: &str = "cluster-helper";

/// The service account the cluster provisions in every namespace
pub const DEFAULT_SERVICE_ACCOUNT: &str = "default";

/// The controller name reported on Kubernetes events
pub const OPERATOR_NAME: &str = "cluster-helper";

/// Kubernetes label keys and values used by cluster-helper
pub mod labels {
    /// Namespace label that opts a namespace in or out of injection
    pub const INJECTION: &str = "clusterhelper.dev/injection";
    /// Opts a namespace in when injection is off by default
    pub const INJECTION_ENABLED: &str = "enabled";
    /// Opts a namespace out when injection is on by default
    pub const INJECTION_DISABLED: &str = "disabled";

    /// Set on every object we create so that the watches can find them
    pub const MANAGED: &str = "clusterhelper.dev/managed";
    pub const MANAGED_VALUE: &str = "true";
}

/// Kubernetes event reasons and actions
pub mod events {
    pub const REASON_RECONCILED: &str = "ClusterHelperNamespaceReconciled";
    pub const ACTION_RECONCILE: &str = "Reconcile";
}

/// Requeue configuration
pub mod requeue {
    /// Default delay before retrying a namespace after a transient failure
    pub const DEFAULT_RETRY_SECS: u64 = 30;
    /// Delay before retrying a namespace that failed on misconfiguration
    pub const MISCONFIGURATION_SECS: u64 = 300;
}
