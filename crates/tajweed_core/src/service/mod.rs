//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the text pipeline and the segment store into use-case APIs.
//! - Keep UI/FFI layers decoupled from cache details.

pub mod tajweed_service;
