//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session manager is the single owner of authentication state; pages
//! and components consume the derived snapshot through context and never
//! touch persisted credentials directly.

pub mod session;
