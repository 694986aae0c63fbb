//! Catalog Console Admin library.
//!
//! Submission handlers for the product edit screen and the catalog mutation
//! API client they run against in production.
//!
//! # Security
//!
//! This crate handles a HIGH PRIVILEGE staff token with catalog write
//! access. It is only ever read from the environment and never logged.
//!
//! # Modules
//!
//! - [`products`] - Update, image upload and image reorder handlers
//! - [`dashboard`] - GraphQL client and mutation variable types
//! - [`config`] - Environment configuration
//! - [`error`] - Handler error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod products;
