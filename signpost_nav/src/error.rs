// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use signpost_sections::RegistryError;

/// Errors reported while building a [`NavBar`](crate::NavBar).
///
/// Nothing fails at runtime: missing sections and unmounted elements are skipped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NavError {
    /// The nav items are empty or contain a duplicate key.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// A numeric configuration field is negative or not finite.
    #[error("invalid navigation config: `{field}` must be finite and non-negative, got {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
