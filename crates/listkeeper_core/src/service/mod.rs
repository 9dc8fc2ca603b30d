//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, validation and sort calls into request-level APIs.
//! - Keep HTTP/view layers decoupled from entity internals.

pub mod list_service;
