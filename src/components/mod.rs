//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render derived session state; none of them read persisted
//! credentials or talk to the network directly.

pub mod cell_card;
pub mod navbar;
pub mod route_guard;
