//! Core types for Shopin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod appearance;
pub mod id;
pub mod price;

pub use appearance::{Position, Theme};
pub use id::ProductId;
pub use price::{Price, PriceError};
