// tagrw/src/lib.rs

//! tagrw
//!
//! Reader/writer orchestration core for an NFC stack: one request and
//! notification interface over Type-1/2/3/4 and ISO 15693 tags, driving an
//! external per-family tag engine one command at a time.

pub mod config;
pub mod constants;
#[cfg(feature = "async")]
pub mod driver;
pub mod engine;
pub mod error;
pub mod host;
pub mod notify;
pub mod prelude;
pub mod protocol;
pub mod request;
pub mod rw;
pub mod test_support;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
