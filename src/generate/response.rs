//! Response type wrapping.
//!
//! Decides the declared return type of a generated method. With
//! `use_api_responses` the payload is carried inside the HTTP envelope type
//! (`IApiResponse`); otherwise it rides a plain asynchronous completion
//! (`Task`).

use crate::error::GenerateError;
use crate::model::EndpointMethod;

use super::names::{AmbiguousTypes, resolve};

pub fn wrap_response(
    method: &EndpointMethod,
    use_api_responses: bool,
    ambiguous: &AmbiguousTypes,
) -> Result<String, GenerateError> {
    let Some(response) = &method.response_type else {
        let marker = if use_api_responses { "IApiResponse" } else { "Task" };
        return Ok(marker.to_string());
    };

    if response.name.is_empty() {
        return Err(GenerateError::UnnamableResponse {
            verb: method.http_method.as_str(),
            path: method.path.clone(),
        });
    }

    let payload = resolve(response, ambiguous);
    if use_api_responses {
        Ok(format!("IApiResponse<{payload}>"))
    } else {
        Ok(format!("Task<{payload}>"))
    }
}
