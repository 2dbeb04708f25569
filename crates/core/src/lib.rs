//! Shopin Core - Shared types library.
//!
//! This crate provides common types used across all Shopin components:
//! - `widget` - Embeddable product pop-up library
//! - `server` - Widget delivery service (embed assets, rendered fragments)
//! - `cli` - Command-line tools for integrators
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, and widget appearance enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
