//! Static index generation for the year-organised paper collection
//!
//! # Error Handling Strategy
//!
//! The indexer fails fast on preconditions and degrades gracefully per folder:
//!
//! - **Missing root**: Returns an error before anything is written, so the binary exits
//!   non-zero and any existing page is left untouched.
//!
//! - **Folder-level failures**: A year folder that cannot be read is logged as a warning
//!   and skipped. The remaining years are still indexed.
//!
//! - **Output failures**: Failing to write the page is fatal. The page is written to a
//!   temp file and renamed, so readers never observe a half-written page.

pub mod builder;
pub mod page;
pub mod year_discovery;

pub use builder::{IndexReport, generate_index};
pub use page::{render_page, write_page};
pub use year_discovery::build_catalog;
