//! # vt-search
//!
//! Approximate matching of a claim query against the local corpus of
//! previously recorded claims.
//!
//! - [`ClaimSource`]: read accessor for the corpus (JSONL file or in-memory)
//! - [`ClaimIndex`]: immutable index built once per corpus snapshot

pub mod corpus;
pub mod index;

mod error;

pub use corpus::{ClaimSource, JsonlClaimSource, StaticClaims};
pub use error::SearchError;
pub use index::{ClaimIndex, RELEVANCE_THRESHOLD};
