//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Member-only pages wrap their content in `RequireAuth`;
//! the auth forms wrap theirs in `GuestOnly`.

pub mod cells;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod reclamation;
pub mod register;
