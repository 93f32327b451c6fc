//! Batch manifest sync to the remote spreadsheet endpoint
//!
//! # Error Handling Strategy
//!
//! - **Preconditions**: Missing credentials or a missing root are errors returned before
//!   any network traffic. The binary exits non-zero.
//!
//! - **Walk failures**: Entries that cannot be read during the recursive walk are logged
//!   and skipped.
//!
//! - **Remote failures**: A non-200 status or a transport error is logged and reported
//!   as a [`SyncOutcome`], never as an `Err`. The run ends normally and nothing is retried.

pub mod client;
pub mod collector;

pub use client::{HttpTransport, SyncOutcome, SyncResponse, SyncTransport, run_sync, sync_files};
pub use collector::collect_records;
