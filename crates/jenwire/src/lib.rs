//! Jenwire - a client library for the Jenkins REST+XML management API.
//!
//! Callers enumerate, inspect, and mutate server-side entities (views,
//! jobs, builds) without hand-crafting HTTP calls or XML:
//!
//! ```no_run
//! use jenwire::Jenkins;
//!
//! # async fn example() -> jenwire::Result<()> {
//! let jenkins = Jenkins::connect("https://ci.example.com", None)?;
//! if let Some(view) = jenkins.find_view("nightly").await? {
//!     for job in view.jobs().await? {
//!         println!("{}", job.name().await?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The crate is a thin facade over three layers:
//! - `jenwire-core` - the REST controller and the caching write-back
//!   access layer for remote documents
//! - `jenwire-plugin-api` - resolution of plugin-typed XML fragments to
//!   typed handlers through a registry
//! - `jenwire-plugins` - the supported handler implementations

pub mod build;
pub mod error;
pub mod jenkins;
pub mod job;
pub mod jobxml;
pub mod view;

pub use build::Build;
pub use error::{Error, Result};
pub use jenkins::Jenkins;
pub use job::Job;
pub use jobxml::JobXml;
pub use view::View;

pub use jenwire_core::{ApiData, CacheContext, Credentials, PostData, RestClient};
pub use jenwire_plugin_api::{
    CompositeView,
    PluginError,
    PluginHandle,
    PluginRegistry,
    PluginType,
    ScmPlugin,
    ViewPlugin,
};
pub use jenwire_plugins::{clear_registry, NestedView, ViewXml};
