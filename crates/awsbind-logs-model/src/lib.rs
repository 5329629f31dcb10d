//! CloudWatch Logs model types for awsbind.
//!
//! Hand-written request, response and error types for the Logs API
//! (`2014-03-28`). Members use `camelCase` on the wire and timestamps are
//! epoch milliseconds.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{LOGS_ERRORS, LogsError};
pub use operations::{LOGS_METADATA, LogsOperation};
