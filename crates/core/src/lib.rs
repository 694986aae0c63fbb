//! Catalog Console Core - Shared domain types.
//!
//! This crate provides the types used by the product-management screens:
//! - `admin` - Form submission handlers and the mutation API client
//! - `cli` - Command-line entry point for running submissions
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async runtime. This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, metadata entries, decimal normalization and list moves

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
