//! Client interface document rendering.
//!
//! Assembles the per-method text blocks in their fixed order (documentation,
//! multipart marker, static headers, route attribute, declaration) and wraps
//! them into one namespace + interface document per client. Rendering is pure
//! string building over blocks the other stages precomputed.

use crate::diagnostics::Diagnostics;
use crate::error::GenerateError;
use crate::model::{Client, EndpointMethod, HttpVerb};

use super::classify::{RenderedParam, classify, order_for_call_site, split_constant_headers};
use super::dedup::dedupe_endpoints;
use super::names::AmbiguousTypes;
use super::response::wrap_response;

const INDENT: &str = "    ";

/// Trait for emitting interface source text from render nodes.
pub trait Emit {
    fn emit(&self) -> String;
}

impl Emit for RenderedParam {
    fn emit(&self) -> String {
        let mut out = String::new();
        if let Some(attribute) = &self.attribute {
            out.push_str(attribute);
            out.push(' ');
        }
        out.push_str(&self.type_name);
        out.push(' ');
        out.push_str(&self.name);
        if let Some(literal) = &self.default_literal {
            out.push_str(" = ");
            out.push_str(literal);
        }
        out
    }
}

/// One fully resolved method, ready to print.
#[derive(Debug, Clone)]
pub struct MethodBlock {
    pub documentation: Option<String>,
    pub is_multipart: bool,
    pub static_headers: Vec<(String, String)>,
    pub verb: HttpVerb,
    pub path: String,
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<RenderedParam>,
}

impl Emit for MethodBlock {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl MethodBlock {
    /// Emit with the given indentation level (one `INDENT` per level).
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = INDENT.repeat(indent);
        let mut out = String::new();

        if let Some(documentation) = &self.documentation {
            for line in documentation.lines() {
                out.push_str(&format!("{prefix}/// {line}\n"));
            }
        }
        if self.is_multipart {
            out.push_str(&format!("{prefix}[Multipart]\n"));
        }
        if !self.static_headers.is_empty() {
            let pairs = self
                .static_headers
                .iter()
                .map(|(name, value)| format!("\"{name}: {value}\""))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{prefix}[Headers({pairs})]\n"));
        }
        out.push_str(&format!(
            "{prefix}[{}(\"{}\")]\n",
            self.verb.attribute_name(),
            self.path
        ));

        let parameters = self
            .parameters
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{prefix}{} {}({});\n",
            self.return_type, self.name, parameters
        ));
        out
    }
}

/// Resolve one surviving endpoint into a printable block.
pub fn build_method_block(
    method: &EndpointMethod,
    ambiguous: &AmbiguousTypes,
    use_api_responses: bool,
) -> Result<MethodBlock, GenerateError> {
    let (call_site, static_headers) = split_constant_headers(method)?;
    let parameters = order_for_call_site(call_site)
        .into_iter()
        .map(|parameter| classify(parameter, ambiguous))
        .collect();
    let return_type = wrap_response(method, use_api_responses, ambiguous)?;

    Ok(MethodBlock {
        documentation: method.documentation.clone(),
        is_multipart: method.is_multipart,
        static_headers,
        verb: method.http_method,
        path: method.path.clone(),
        return_type,
        name: method.name.clone(),
        parameters,
    })
}

/// Render the full interface document for one client.
///
/// Runs both collision passes first; any invariant violation aborts the whole
/// client so no partial document escapes.
pub fn render_client(
    client: &Client,
    ambiguous: &AmbiguousTypes,
    use_api_responses: bool,
    diagnostics: &mut Diagnostics,
) -> Result<String, GenerateError> {
    let surviving = dedupe_endpoints(&client.name, &client.endpoint_methods, diagnostics);

    let mut blocks = Vec::with_capacity(surviving.len());
    for method in &surviving {
        blocks.push(build_method_block(method, ambiguous, use_api_responses)?);
    }

    let mut out = String::new();
    for namespace in &client.imported_namespaces {
        out.push_str(&format!("using {namespace};\n"));
    }
    if !client.imported_namespaces.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("namespace {}\n{{\n", client.namespace));
    out.push_str(&format!(
        "{INDENT}{} interface {}\n{INDENT}{{\n",
        client.access_modifier, client.name
    ));
    let body = blocks
        .iter()
        .map(|block| block.emit_indented(2))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&body);
    out.push_str(&format!("{INDENT}}}\n}}\n"));
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{Parameter, ParameterSource, TypeDescriptor};

    fn string_type() -> TypeDescriptor {
        TypeDescriptor {
            name: "string".into(),
            namespace: None,
            is_string: true,
            is_value_type: false,
            is_enumerable: false,
            is_dictionary: false,
        }
    }

    fn query_param(name: &str) -> Parameter {
        Parameter {
            name: name.into(),
            parameter_name: name.into(),
            ty: string_type(),
            source: ParameterSource::Query,
            is_constant: false,
            default_value_literal: None,
        }
    }

    fn file_param(name: &str) -> Parameter {
        Parameter {
            name: name.into(),
            parameter_name: name.into(),
            ty: string_type(),
            source: ParameterSource::File,
            is_constant: false,
            default_value_literal: None,
        }
    }

    fn method(name: &str, path: &str, parameters: Vec<Parameter>) -> EndpointMethod {
        EndpointMethod {
            name: name.into(),
            http_method: HttpVerb::Get,
            path: path.into(),
            parameters,
            response_type: None,
            is_multipart: false,
            documentation: None,
        }
    }

    fn client(endpoint_methods: Vec<EndpointMethod>) -> Client {
        Client {
            name: "IUsersClient".into(),
            namespace: "Acme.Api.Clients".into(),
            location: "Clients".into(),
            access_modifier: "public".into(),
            endpoint_methods,
            imported_namespaces: vec!["System.Threading.Tasks".into(), "Refit".into()],
        }
    }

    #[test]
    fn test_method_block_fixed_order() {
        let mut upload = method("UploadAvatar", "/users/{id}/avatar", vec![file_param("avatar")]);
        upload.http_method = HttpVerb::Post;
        upload.is_multipart = true;
        upload.documentation = Some("Upload an avatar.\nReplaces any existing image.".into());
        upload.parameters.push(Parameter {
            name: "X-Api-Version".into(),
            parameter_name: "apiVersion".into(),
            ty: string_type(),
            source: ParameterSource::Header,
            is_constant: true,
            default_value_literal: Some("\"1.0\"".into()),
        });

        let block = build_method_block(&upload, &AmbiguousTypes::default(), false).unwrap();
        let text = block.emit();
        let expected = "/// Upload an avatar.\n\
                        /// Replaces any existing image.\n\
                        [Multipart]\n\
                        [Headers(\"X-Api-Version: 1.0\")]\n\
                        [Post(\"/users/{id}/avatar\")]\n\
                        Task UploadAvatar(StreamPart avatar);\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_document_wrapper() {
        let rendered = render_client(
            &client(vec![method("ListUsers", "/users", vec![query_param("page")])]),
            &AmbiguousTypes::default(),
            false,
            &mut Diagnostics::new(),
        )
        .unwrap();

        let expected = "using System.Threading.Tasks;\n\
                        using Refit;\n\
                        \n\
                        namespace Acme.Api.Clients\n\
                        {\n    \
                        public interface IUsersClient\n    \
                        {\n        \
                        [Get(\"/users\")]\n        \
                        Task ListUsers(string page);\n    \
                        }\n\
                        }\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_blank_line_between_method_blocks() {
        let rendered = render_client(
            &client(vec![
                method("ListUsers", "/users", vec![]),
                method("ListOrders", "/orders", vec![]),
            ]),
            &AmbiguousTypes::default(),
            false,
            &mut Diagnostics::new(),
        )
        .unwrap();

        assert!(rendered.contains("Task ListUsers();\n\n        [Get(\"/orders\")]"));
    }

    #[test]
    fn test_defaulted_parameter_renders_with_literal() {
        let mut page = query_param("page");
        page.default_value_literal = Some("\"1\"".into());
        let rendered = render_client(
            &client(vec![method("ListUsers", "/users", vec![page, query_param("sort")])]),
            &AmbiguousTypes::default(),
            false,
            &mut Diagnostics::new(),
        )
        .unwrap();

        // The defaulted parameter moves after the plain one.
        assert!(rendered.contains("Task ListUsers(string sort, string page = \"1\");"));
    }

    #[test]
    fn test_failed_method_fails_whole_client() {
        let mut broken = method("Broken", "/broken", vec![query_param("id")]);
        broken.parameters[0].is_constant = true;

        let result = render_client(
            &client(vec![method("ListUsers", "/users", vec![]), broken]),
            &AmbiguousTypes::default(),
            false,
            &mut Diagnostics::new(),
        );
        assert!(result.is_err());
    }
}
