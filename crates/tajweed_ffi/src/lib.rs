//! Flutter bridge crate for the Tajweed core.

pub mod api;
