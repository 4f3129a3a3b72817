// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lookup of objects by name

use kube::{Api, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// Check whether an API error is a 404
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404)
}

/// Fetch an object by name, mapping a 404 to `None`
pub async fn get_if_exists<K>(api: &Api<K>, name: &str) -> Result<Option<K>, kube::Error>
where
    K: Resource + Clone + Debug + DeserializeOwned,
    K::DynamicType: Default,
{
    match api.get(name).await {
        Ok(object) => Ok(Some(object)),
        Err(err) if is_not_found(&err) => {
            debug!("{} {} not found", K::kind(&Default::default()), name);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
