//! Wire types for the stock dashboard backend.
//!
//! The backend is an opaque REST collaborator; this crate only describes the
//! payload shapes it returns (quotes, history, market summary, comparison and
//! the company list) so the analytics layer can consume them.

mod errors;
pub mod types;

pub use self::errors::Error;
pub use self::types::Period;
