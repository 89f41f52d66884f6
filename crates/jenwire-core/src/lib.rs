//! Core IO primitives for the Jenkins REST API.
//!
//! This crate provides the resource-access layer shared by every Jenwire
//! entity wrapper:
//! - [`RestClient`]: a controller bound to one resource locator, covering
//!   raw text, structured `api/json` data, HTTP headers, and generic POSTs
//! - [`CacheContext`]: the shared text/header caches plus the write-back
//!   `config.xml` cache with explicit dirty-tracking and flush

pub mod cache;
pub mod client;
pub mod error;

pub use cache::CacheContext;
pub use client::{ApiData, Credentials, PostData, RestClient};
pub use error::{Error, Result};
