// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::requeue;
use crate::filter::InjectionPolicy;
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Coordinates of the secret that gets copied into every namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSecret {
    pub namespace: String,
    pub name: String,
}

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Decides which namespaces take part in reconciliation
    pub injection_policy: InjectionPolicy,
    /// Cluster role bound to the default service account, if any
    pub cluster_role: Option<String>,
    /// Secret copied into every namespace and attached as an image pull secret
    pub source_secret: Option<SourceSecret>,
    pub retry_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Values are trimmed, empty values are treated as unset
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let injection_default = match var("CLUSTER_HELPER_INJECTION_DEFAULT") {
            Some(v) => parse_bool(&v)
                .context("CLUSTER_HELPER_INJECTION_DEFAULT must be a boolean")?,
            None => true,
        };

        let source_secret = match (var("SOURCE_SECRET_NAMESPACE"), var("SOURCE_SECRET_NAME")) {
            (Some(namespace), Some(name)) => Some(SourceSecret { namespace, name }),
            (None, None) => None,
            (Some(_), None) => {
                bail!("SOURCE_SECRET_NAME must be set when SOURCE_SECRET_NAMESPACE is set")
            }
            (None, Some(_)) => {
                bail!("SOURCE_SECRET_NAMESPACE must be set when SOURCE_SECRET_NAME is set")
            }
        };

        let retry_secs = match var("CLUSTER_HELPER_REQUEUE_SECS") {
            Some(v) => v
                .parse::<u64>()
                .context("CLUSTER_HELPER_REQUEUE_SECS must be a number of seconds")?,
            None => requeue::DEFAULT_RETRY_SECS,
        };
        if retry_secs == 0 {
            bail!("CLUSTER_HELPER_REQUEUE_SECS must be greater than zero");
        }

        Ok(Config {
            injection_policy: InjectionPolicy::from_injection_default(injection_default),
            cluster_role: var("CLUSTER_ROLE"),
            source_secret,
            retry_interval: Duration::from_secs(retry_secs),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("invalid boolean value '{}'", other),
    }
}
