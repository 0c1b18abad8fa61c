//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and browser-environment concerns from
//! page and component logic to improve reuse and testability.

pub mod dark_mode;
pub mod format;
