//! Endpoint-model-to-client synthesis pipeline.
//!
//! The pipeline runs client by client, synchronously, over an immutable
//! snapshot:
//! 1. The shared ambiguous-types set is computed once for the whole run.
//! 2. Each client's endpoint list goes through both collision passes
//!    (`dedup`), then each survivor is classified (`classify`), typed
//!    (`response`) and printed (`render`).
//!
//! Given the same snapshot, the output text is byte-identical across runs.
//!
//! ## Module Structure
//!
//! - `dedup`: endpoint-identity and method-signature collision passes
//! - `classify`: parameter calling-convention classification
//! - `response`: declared return type wrapping
//! - `names`: type name resolution and the ambiguous-types set
//! - `render`: method blocks and document assembly

mod classify;
mod dedup;
mod names;
mod render;
mod response;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::diagnostics::Diagnostics;
use crate::error::GenerateError;
use crate::model::ClientCollection;

pub use classify::{MULTIPART_ITEM_TYPE, RenderedParam};
pub use names::{AmbiguousTypes, resolve};
pub use render::{Emit, MethodBlock, render_client};

/// Response-shape configuration for the generation run.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Wrap responses in the HTTP envelope type instead of a plain
    /// asynchronous completion.
    pub use_api_responses: bool,
}

/// One rendered interface document.
#[derive(Debug, Clone)]
pub struct GeneratedClient {
    pub name: String,
    /// Caller-supplied output grouping key.
    pub location: String,
    pub contents: String,
}

/// A client whose generation hit a fatal invariant violation.
#[derive(Debug)]
pub struct ClientFailure {
    pub client: String,
    pub error: GenerateError,
}

/// Result of a full generation run.
#[derive(Debug)]
pub struct Generation {
    pub documents: Vec<GeneratedClient>,
    pub diagnostics: Diagnostics,
    pub failures: Vec<ClientFailure>,
}

/// Generate one interface document per client.
///
/// Duplicate metadata never aborts the run; it is resolved keep-last and
/// reported through [`Generation::diagnostics`]. An invariant violation is
/// fatal for its client only: the client lands in [`Generation::failures`]
/// with no document, and the remaining clients still generate.
pub fn generate(collection: &ClientCollection, settings: &GeneratorSettings) -> Generation {
    let ambiguous = AmbiguousTypes::from_clients(&collection.clients);
    let mut diagnostics = Diagnostics::new();
    let mut documents = Vec::new();
    let mut failures = Vec::new();

    for client in &collection.clients {
        debug!(client = %client.name, "Rendering client interface.");
        match render_client(client, &ambiguous, settings.use_api_responses, &mut diagnostics) {
            Ok(contents) => documents.push(GeneratedClient {
                name: client.name.clone(),
                location: client.location.clone(),
                contents,
            }),
            Err(error) => {
                warn!(client = %client.name, %error, "Client generation failed.");
                failures.push(ClientFailure {
                    client: client.name.clone(),
                    error,
                });
            }
        }
    }

    Generation {
        documents,
        diagnostics,
        failures,
    }
}

/// Parse an extraction snapshot and generate from it.
pub fn generate_from_json(
    json: &str,
    settings: &GeneratorSettings,
) -> Result<Generation, GenerateError> {
    let collection = ClientCollection::from_json(json).map_err(GenerateError::InvalidSnapshot)?;
    Ok(generate(&collection, settings))
}
