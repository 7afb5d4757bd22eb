//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate mutator, repositories, and the reminder boundary into
//!   use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod board_service;
