//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on envelope translation and auth plumbing.

pub mod bootstrap;
pub mod dashboard;
pub mod grn;
pub mod maintenance;
pub mod product;
pub mod session;
pub mod stock;
pub mod supplier;
pub mod warehouse;
