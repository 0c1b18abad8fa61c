//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so individual components can
//! depend on small focused models. Each is provided as an `RwSignal` context
//! from the app root.

pub mod auth;
pub mod toast;
