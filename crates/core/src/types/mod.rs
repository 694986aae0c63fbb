//! Core types for Catalog Console.
//!
//! This module provides type-safe wrappers and helpers for common domain concepts.

pub mod decimal;
pub mod id;
pub mod metadata;
pub mod reorder;

pub use decimal::{DecimalSeparator, NormalizeError, normalize_decimal, normalize_weight};
pub use id::*;
pub use metadata::{MetadataEntry, removed_keys};
pub use reorder::{ReorderError, ReorderEvent, move_item};
