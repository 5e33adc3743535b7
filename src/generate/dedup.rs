//! Endpoint collision resolution.
//!
//! Two sequential keep-last passes over each client's endpoint list:
//! 1. Endpoint identity: verb + path + ordered parameter tuples. Catches
//!    endpoints that are indistinguishable at the wire level.
//! 2. Method signature: name + non-constant parameter type names. Catches
//!    methods that would collide inside a single interface even when their
//!    wire identity differs.
//!
//! Collisions are warnings, never failures: the later method replaces the
//! earlier one in the earlier slot, so both the keep-last policy and the
//! output order are explicit invariants rather than incidental map behavior.

use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::model::{EndpointMethod, ParameterSource};

use super::classify::MULTIPART_ITEM_TYPE;

/// Run both dedup passes, identity first, its survivors feeding the
/// signature pass.
pub fn dedupe_endpoints(
    client_name: &str,
    methods: &[EndpointMethod],
    diagnostics: &mut Diagnostics,
) -> Vec<EndpointMethod> {
    let by_identity = keep_last(methods.to_vec(), identity_key, |key| {
        diagnostics.record(Diagnostic::DuplicateEndpoint {
            client: client_name.to_string(),
            key,
        });
    });
    keep_last(by_identity, signature_key, |signature| {
        diagnostics.record(Diagnostic::DuplicateSignature {
            client: client_name.to_string(),
            signature,
        });
    })
}

/// Ordered keep-last map: first occurrence fixes the slot, the last write to
/// a key wins the slot's value.
fn keep_last(
    methods: Vec<EndpointMethod>,
    key_fn: impl Fn(&EndpointMethod) -> String,
    mut on_collision: impl FnMut(String),
) -> Vec<EndpointMethod> {
    let mut entries: Vec<EndpointMethod> = Vec::with_capacity(methods.len());
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(methods.len());

    for method in methods {
        let key = key_fn(&method);
        match slots.get(&key) {
            Some(&slot) => {
                entries[slot] = method;
                on_collision(key);
            }
            None => {
                slots.insert(key, entries.len());
                entries.push(method);
            }
        }
    }
    entries
}

/// Wire-level identity of an endpoint.
fn identity_key(method: &EndpointMethod) -> String {
    let mut key = format!("{} {}", method.http_method.as_str(), method.path);
    for parameter in &method.parameters {
        key.push('|');
        key.push_str(parameter.source.as_str());
        key.push(':');
        key.push_str(&parameter.ty.full_name());
        key.push(':');
        key.push_str(&parameter.name);
        if parameter.is_constant {
            key.push_str(":const=");
            key.push_str(parameter.default_value_literal.as_deref().unwrap_or(""));
        }
    }
    key
}

/// Call signature of the generated method. Constant parameters are excluded
/// because they render as method-level attributes, not call-site arguments;
/// file parameters declare the fixed multipart item type.
fn signature_key(method: &EndpointMethod) -> String {
    let types: Vec<String> = method
        .parameters
        .iter()
        .filter(|parameter| !parameter.is_constant)
        .map(|parameter| match parameter.source {
            ParameterSource::File => MULTIPART_ITEM_TYPE.to_string(),
            _ => parameter.ty.full_name(),
        })
        .collect();
    format!("{}({})", method.name, types.join(", "))
}
