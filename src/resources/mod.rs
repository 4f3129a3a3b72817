// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired-state builders for the objects cluster-helper creates.

pub mod role_binding;
pub mod secret;

pub use role_binding::make_role_binding;
pub use secret::make_secret_copy;

use crate::constants::labels;
use std::collections::BTreeMap;

/// Labels put on every object we create
pub fn managed_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(
        labels::MANAGED.to_string(),
        labels::MANAGED_VALUE.to_string(),
    )])
}

/// Check whether an object carries the managed label
pub fn is_managed(object_labels: &BTreeMap<String, String>) -> bool {
    object_labels
        .get(labels::MANAGED)
        .is_some_and(|v| v == labels::MANAGED_VALUE)
}
