//! Blocking CloudWatch Logs client.
//!
//! ```rust,no_run
//! use awsbind_core::ClientConfig;
//! use awsbind_logs::LogsClient;
//! use awsbind_logs_model::input::PutLogEventsInput;
//! use awsbind_logs_model::types::InputLogEvent;
//!
//! let client = LogsClient::new(&ClientConfig::from_env())?;
//! let output = client.put_log_events(&PutLogEventsInput {
//!     log_group_name: "/app/web".to_owned(),
//!     log_stream_name: "i-0123".to_owned(),
//!     log_events: vec![InputLogEvent::new(1_700_000_000_000, "started")],
//!     sequence_token: None,
//! })?;
//! println!("next token: {:?}", output.next_sequence_token);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;

pub use awsbind_logs_model as model;
pub use client::{LogsClient, LogsResult};
