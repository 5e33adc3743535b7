//! Parameter calling-convention classification.
//!
//! Maps each parameter's metadata to the decoration text required at the call
//! site, pulls constant headers out into a method-level directive, and orders
//! the remaining parameters so defaulted ones come last.

use crate::error::GenerateError;
use crate::model::{EndpointMethod, Parameter, ParameterSource};

use super::names::{AmbiguousTypes, resolve};

/// Declared type of file parameters at the call site.
pub const MULTIPART_ITEM_TYPE: &str = "StreamPart";

/// A parameter ready for rendering at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedParam {
    /// Calling-convention attribute, if the binding needs one.
    pub attribute: Option<String>,
    pub type_name: String,
    pub name: String,
    pub default_literal: Option<String>,
}

/// Split the parameter list into call-site parameters and the `name: value`
/// pairs of the static-headers directive.
///
/// Constant headers never appear at the call site; their literal is rendered
/// once at method level with quote characters stripped. A constant parameter
/// without a literal violates the model invariant and fails the client.
pub fn split_constant_headers(
    method: &EndpointMethod,
) -> Result<(Vec<&Parameter>, Vec<(String, String)>), GenerateError> {
    let mut call_site = Vec::new();
    let mut static_headers = Vec::new();

    for parameter in &method.parameters {
        if parameter.is_constant && parameter.default_value_literal.is_none() {
            return Err(GenerateError::ConstantWithoutLiteral {
                parameter: parameter.name.clone(),
                verb: method.http_method.as_str(),
                path: method.path.clone(),
            });
        }
        if parameter.source == ParameterSource::Header && parameter.is_constant {
            let literal = parameter.default_value_literal.clone().unwrap_or_default();
            static_headers.push((parameter.name.clone(), literal.replace(['"', '\''], "")));
        } else {
            call_site.push(parameter);
        }
    }
    Ok((call_site, static_headers))
}

/// Stable reorder: parameters without a default literal first, then those
/// with one, relative order preserved within each group.
pub fn order_for_call_site(parameters: Vec<&Parameter>) -> Vec<&Parameter> {
    let (without_default, with_default): (Vec<_>, Vec<_>) = parameters
        .into_iter()
        .partition(|parameter| parameter.default_value_literal.is_none());
    without_default.into_iter().chain(with_default).collect()
}

/// Classify one call-site parameter into its decoration and rendered type.
pub fn classify(parameter: &Parameter, ambiguous: &AmbiguousTypes) -> RenderedParam {
    let (attribute, type_name) = match parameter.source {
        ParameterSource::Body => (Some("[Body]".to_string()), resolve(&parameter.ty, ambiguous)),
        ParameterSource::Form => (
            Some("[Body(BodySerializationMethod.UrlEncoded)]".to_string()),
            resolve(&parameter.ty, ambiguous),
        ),
        ParameterSource::Header => (
            Some(format!("[Header(\"{}\")]", parameter.name)),
            resolve(&parameter.ty, ambiguous),
        ),
        ParameterSource::Query => (query_attribute(parameter), resolve(&parameter.ty, ambiguous)),
        // The multipart item type itself marks the binding.
        ParameterSource::File => (None, MULTIPART_ITEM_TYPE.to_string()),
    };

    RenderedParam {
        attribute,
        type_name,
        name: parameter.parameter_name.clone(),
        default_literal: parameter.default_value_literal.clone(),
    }
}

/// Decide how a query parameter is declared.
///
/// Plain reference objects that are not key/value sequences are flattened
/// into individual query keys via `[Query]`. Otherwise an alias binding is
/// emitted only when the wire name and call-site name differ beyond casing.
fn query_attribute(parameter: &Parameter) -> Option<String> {
    let ty = &parameter.ty;
    let is_key_value_pairs = ty.is_enumerable && !ty.is_dictionary && !ty.is_string;
    if !ty.is_string && !ty.is_value_type && !is_key_value_pairs {
        return Some("[Query]".to_string());
    }
    if !parameter.name.eq_ignore_ascii_case(&parameter.parameter_name) {
        return Some(format!("[AliasAs(\"{}\")]", parameter.name));
    }
    None
}
