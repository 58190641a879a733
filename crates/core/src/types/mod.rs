//! Core types for LuxLamp.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod price;

pub use cart::{LineItem, total_quantity};
pub use catalog::{Collection, Product};
pub use id::*;
pub use price::{CurrencyCode, Price};
