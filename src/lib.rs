#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Refit-style client interface generation from API endpoint metadata.
//!
//! Takes an immutable snapshot of a web API's endpoints (verbs, paths,
//! parameters, response types) and emits one strongly-typed client interface
//! document per logical client grouping:
//! - Naming collisions between endpoints and between method signatures are
//!   resolved keep-last, with warnings collected in a diagnostic sink
//! - Each parameter is classified into its calling convention (body, form,
//!   header, query, file, constant)
//! - Type names that collide across namespaces are fully qualified
//!
//! The pipeline performs no I/O and no HTTP calls; callers decide where the
//! rendered documents go.

mod diagnostics;
mod error;
mod generate;
mod model;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::GenerateError;
pub use generate::{
    AmbiguousTypes, ClientFailure, Emit, GeneratedClient, GeneratorSettings, Generation,
    MULTIPART_ITEM_TYPE, MethodBlock, RenderedParam, generate, generate_from_json, render_client,
    resolve,
};
pub use model::{
    Client, ClientCollection, EndpointMethod, HttpVerb, Parameter, ParameterSource, TypeDescriptor,
};
