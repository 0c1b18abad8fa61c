//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Dashboard, products, movements, GRN, and login talk to
//! the server API; POS, projects, messages, and billing run on local demo
//! state only.

pub mod billing;
pub mod dashboard;
pub mod grn;
pub mod login;
pub mod messages;
pub mod movements;
pub mod pos;
pub mod products;
pub mod projects;
