//! Canonical domain records for tasks and categories.
//!
//! # Responsibility
//! - Define the data structures every other layer operates on.
//! - Keep field-level invariants next to the records that own them.
//!
//! # Invariants
//! - Every record is identified by a stable id assigned at creation.
//! - Records are plain values; mutation happens by producing new values.

pub mod category;
pub mod task;
