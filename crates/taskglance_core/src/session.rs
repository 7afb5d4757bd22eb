//! Mock authentication session state.
//!
//! # Responsibility
//! - Track whether the single local user is signed in.
//!
//! # Invariants
//! - A fresh session is always unauthenticated.
//! - State changes only through `login`/`logout`.
//!
//! This is a stand-in gate for the presentation layer, not a security
//! boundary; real authentication lives outside the core.

use log::info;

/// Process-local sign-in flag with explicit transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Starts a new, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) {
        self.authenticated = true;
        info!("event=session_login module=session status=ok");
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        info!("event=session_logout module=session status=ok");
    }
}
