//! Endpoint metadata model for serde deserialization.
//!
//! This module defines the immutable snapshot produced by the endpoint
//! extraction step: clients, endpoint methods, parameters and the type
//! descriptors attached to them. The generator never mutates these values;
//! every pipeline stage produces new filtered or decorated views.

use serde::Deserialize;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    /// Wire-level verb name (e.g. "GET").
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
        }
    }

    /// Route attribute name (e.g. "Get" for `[Get("/items")]`).
    pub fn attribute_name(&self) -> &'static str {
        match self {
            HttpVerb::Get => "Get",
            HttpVerb::Post => "Post",
            HttpVerb::Put => "Put",
            HttpVerb::Delete => "Delete",
            HttpVerb::Patch => "Patch",
            HttpVerb::Head => "Head",
            HttpVerb::Options => "Options",
        }
    }
}

/// Where a parameter is bound in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    Body,
    Form,
    Header,
    Query,
    File,
}

impl ParameterSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterSource::Body => "body",
            ParameterSource::Form => "form",
            ParameterSource::Header => "header",
            ParameterSource::Query => "query",
            ParameterSource::File => "file",
        }
    }
}

/// Pre-computed descriptor for a semantic type.
///
/// The extraction step resolves everything the classifier needs into explicit
/// flags, so name resolution stays a pure function over this data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Short type name (e.g. "User").
    pub name: String,
    /// Logical namespace the type lives in, if any.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Whether this is the string type.
    #[serde(default)]
    pub is_string: bool,
    /// Whether this is a value type.
    #[serde(default)]
    pub is_value_type: bool,
    /// Whether the type is enumerable.
    #[serde(default)]
    pub is_enumerable: bool,
    /// Whether the type is a dictionary.
    #[serde(default)]
    pub is_dictionary: bool,
}

impl TypeDescriptor {
    /// Namespace-qualified name, or the short name for namespace-less types.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

/// One call/bind-site argument of an endpoint method.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Wire-level name as it appears in the request.
    pub name: String,
    /// Call-site identifier (may differ from `name`, e.g. casing).
    pub parameter_name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub source: ParameterSource,
    /// True if the parameter always carries one fixed value.
    #[serde(default)]
    pub is_constant: bool,
    /// Textual literal form of the default/constant value.
    #[serde(default)]
    pub default_value_literal: Option<String>,
}

/// One generated client method.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointMethod {
    pub name: String,
    pub http_method: HttpVerb,
    /// URL template, may contain `{parameter}` placeholders.
    pub path: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return payload type; `None` means no payload.
    #[serde(default)]
    pub response_type: Option<TypeDescriptor>,
    #[serde(default)]
    pub is_multipart: bool,
    /// Free-text description rendered verbatim above the method.
    #[serde(default)]
    pub documentation: Option<String>,
}

/// One generated interface document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    /// Logical grouping path, rendered as the namespace block.
    pub namespace: String,
    /// Output grouping key for the caller's file layout.
    #[serde(default)]
    pub location: String,
    pub access_modifier: String,
    #[serde(default)]
    pub endpoint_methods: Vec<EndpointMethod>,
    /// Namespaces declared at the top of the document, in collection order.
    #[serde(default)]
    pub imported_namespaces: Vec<String>,
}

/// The full extraction snapshot: every client of the generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCollection {
    pub clients: Vec<Client>,
}

impl ClientCollection {
    /// Parse an extraction snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse endpoint snapshot: {e}"))
    }
}
