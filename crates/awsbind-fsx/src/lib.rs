//! Blocking Amazon FSx client.
//!
//! ```rust,no_run
//! use awsbind_core::ClientConfig;
//! use awsbind_fsx::FsxClient;
//! use awsbind_fsx_model::input::DescribeFileSystemsInput;
//!
//! let client = FsxClient::new(&ClientConfig::from_env())?;
//! let page = client.describe_file_systems(&DescribeFileSystemsInput::default())?;
//! for fs in page.file_systems.unwrap_or_default() {
//!     println!("{:?}", fs.file_system_id);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;

pub use awsbind_fsx_model as model;
pub use client::{FsxClient, FsxResult};
