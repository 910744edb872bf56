//! View-state layer between the record store and a view surface.
//!
//! # Responsibility
//! - Own the in-memory list of records shown to the user.
//! - Recover from store failures locally and report them on a side channel.
//!
//! # Invariants
//! - The in-memory list never contains a record whose write failed.
//! - Observers are notified synchronously after every mutation.

pub mod list_view_model;
pub mod report;
