//! Presentation-layer domain model.
//!
//! # Responsibility
//! - Define the value objects the view-model and stores exchange.
//!
//! # Invariants
//! - Every record carries a `RecordId` that is never reused.
//! - Records are immutable once constructed.

pub mod record;
