//! Data models shared by the two utilities.
//!
//! - [`Catalog`] - Year label to sorted filenames, embedded in the generated page
//! - [`FileRecord`] - One manifest row (bare filename plus public URL)
//! - [`SyncRequest`] - The batch payload posted to the remote endpoint
//!
//! All of these are built fresh per run and never read back.

pub mod catalog;
pub mod record;

pub use catalog::Catalog;
pub use record::{FileRecord, SYNC_ACTION, SyncRequest};
