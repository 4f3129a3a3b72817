// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for object lookup and merge patch computation.

pub mod lookup;
pub mod patch;

pub use lookup::{get_if_exists, is_not_found};
pub use patch::{create_merge_patch, is_empty_patch};
