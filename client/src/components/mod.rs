//! Reusable UI components shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `layout` carries the sidebar/topbar chrome and the auth guard for every
//! signed-in page; the rest are small presentational pieces (stat cards,
//! status badges, pagination, toast tray).

pub mod layout;
pub mod pager;
pub mod stat_card;
pub mod status_badge;
pub mod toasts;
