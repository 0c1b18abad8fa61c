//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every server endpoint in a typed async helper. All responses
//! share the `records::Envelope` shape, so the envelope unwrap helpers here
//! are the only place envelope handling lives on the client.

pub mod api;
