//! # vt-core
//!
//! Core types and error types for Verita.
//!
//! This crate provides the foundational types shared across all Verita crates:
//! - Evidence entries, provider identities, and aggregated provider slots
//! - Classifier labels, label tallies, and the reduced verdict summary
//! - Local corpus claims and similarity matches
//! - The verification request status enum with its state machine
//! - Cross-cutting error types

pub mod claim;
pub mod enums;
pub mod errors;
pub mod evidence;
pub mod verdict;

pub use claim::{LocalClaim, SimilarityMatch};
pub use enums::{Capability, Label, ProviderId, RequestStatus};
pub use errors::{CoreError, DegenerateVerdict};
pub use evidence::{AggregatedEvidence, EvidenceEntry, ProviderSlot};
pub use verdict::{Dominant, LabelCounts, VerdictSummary};
