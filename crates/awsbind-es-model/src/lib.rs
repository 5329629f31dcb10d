//! Amazon Elasticsearch Service model types for awsbind.
//!
//! Hand-written request, response and error types for the configuration API
//! (`2015-01-01`). The service speaks restJson1: some input members travel in
//! the URI path or query string, the rest in a `PascalCase` JSON body.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{ES_ERRORS, ElasticsearchError};
pub use operations::{ES_METADATA, ElasticsearchOperation};
