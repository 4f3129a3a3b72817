// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::managed_labels;
use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;

/// Copy the contents of `source` into a new secret `namespace/name`.
///
/// None of the source metadata is carried over: the copy gets a fresh
/// identity and only our managed label.
pub fn make_secret_copy(source: &Secret, name: &str, namespace: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(managed_labels()),
            ..Default::default()
        },
        data: source.data.clone(),
        string_data: source.string_data.clone(),
        type_: source.type_.clone(),
        immutable: source.immutable,
    }
}
