//! Amazon FSx model types for awsbind.
//!
//! Hand-written request, response and error types for the FSx API
//! (`2018-03-01`). Members use the service's `PascalCase` names on the wire.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{FSX_ERRORS, FsxError};
pub use operations::{FSX_METADATA, FsxOperation};
