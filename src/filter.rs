// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Label based selection of the namespaces that take part in reconciliation.

use crate::constants::labels;
use std::collections::BTreeMap;

/// Which namespaces get the cluster-helper resources injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionPolicy {
    /// Every namespace except the ones labelled `disabled`
    OnByDefault,
    /// Only namespaces labelled `enabled`
    OffByDefault,
}

impl InjectionPolicy {
    pub fn from_injection_default(injection_default: bool) -> Self {
        if injection_default {
            InjectionPolicy::OnByDefault
        } else {
            InjectionPolicy::OffByDefault
        }
    }

    /// Returns true when a namespace with these labels must be left alone
    pub fn should_skip(&self, namespace_labels: &BTreeMap<String, String>) -> bool {
        let value = namespace_labels.get(labels::INJECTION).map(String::as_str);
        match self {
            InjectionPolicy::OnByDefault => value == Some(labels::INJECTION_DISABLED),
            InjectionPolicy::OffByDefault => value != Some(labels::INJECTION_ENABLED),
        }
    }
}
