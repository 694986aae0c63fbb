//! Domain types for the catalog mutation API.
//!
//! Variable structs serialize to the exact camelCase shape the mutation
//! documents in [`super::mutations`] declare.

pub mod common;
pub mod media;
pub mod metadata;
pub mod product;

pub use common::*;
pub use media::*;
pub use metadata::*;
pub use product::*;
