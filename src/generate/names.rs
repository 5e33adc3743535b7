//! Type name resolution.
//!
//! A type is ambiguous when its short name collides with another type's short
//! name anywhere in the generation run. The ambiguous set is computed once
//! over the whole collection, before any client is rendered, and shared
//! read-only afterwards. Resolution itself is a pure function over the
//! descriptor and that set.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Client, TypeDescriptor};

/// Full names of every type whose short name collides within the run.
#[derive(Debug, Clone, Default)]
pub struct AmbiguousTypes {
    full_names: BTreeSet<String>,
}

impl AmbiguousTypes {
    /// Scan every parameter and response type of every client.
    pub fn from_clients(clients: &[Client]) -> Self {
        let mut by_short_name: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut collect = |ty: &TypeDescriptor| {
            by_short_name
                .entry(ty.name.clone())
                .or_default()
                .insert(ty.full_name());
        };

        for client in clients {
            for method in &client.endpoint_methods {
                for parameter in &method.parameters {
                    collect(&parameter.ty);
                }
                if let Some(response) = &method.response_type {
                    collect(response);
                }
            }
        }

        let full_names = by_short_name
            .into_values()
            .filter(|names| names.len() > 1)
            .flatten()
            .collect();
        Self { full_names }
    }

    pub fn contains(&self, ty: &TypeDescriptor) -> bool {
        self.full_names.contains(&ty.full_name())
    }
}

/// Resolve the printable name for a type: fully qualified when the short name
/// is ambiguous, the minimal short name otherwise.
pub fn resolve(ty: &TypeDescriptor, ambiguous: &AmbiguousTypes) -> String {
    if ambiguous.contains(ty) {
        ty.full_name()
    } else {
        ty.name.clone()
    }
}
