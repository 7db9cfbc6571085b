//! Core building blocks for the signon login client.
//!
//! This crate is UI-free: it holds the form model and validation rules,
//! the HTTP client that talks to the server's form endpoints, configuration
//! loading, and logging setup. The TUI crate layers the interactive
//! controller on top of these types.

pub mod client;
pub mod config;
pub mod form;
pub mod logging;
