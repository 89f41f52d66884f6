//! Supported plugin handler implementations for Jenwire.
//!
//! One module per implementation, mirroring the places Jenkins embeds
//! plugin-typed XML: dashboard views, the SCM descriptor of a job, and the
//! job property/publisher/builder lists. [`registry::supported`] is the
//! static table of everything this crate ships; [`registry::global`] is
//! the process-wide lazily-assembled index over it.

pub mod allview;
pub mod buildblocker;
pub mod buildtrigger;
pub mod conditionalbuilder;
pub mod listview;
pub mod myview;
pub mod nestedview;
pub mod nullscm;
pub mod registry;
pub mod resolve;
pub mod statusview;
pub mod subversion;
pub mod viewxml;

mod util;

pub use nestedview::NestedView;
pub use registry::{clear_registry, global, supported};
pub use resolve::resolve_view;
pub use viewxml::ViewXml;
