//! Plugin resolution API for Jenwire.
//!
//! Jenkins describes extensible entities (views, SCM descriptors, job
//! properties and build steps) as XML fragments tagged with a type
//! identifier. This crate maps those fragments to typed handler objects:
//! - [`PluginType`] extracts the identifier from an element
//! - [`PluginRegistry`] indexes the supported implementations by class name
//! - [`create_xml_plugin`] resolves one element to a [`PluginHandle`]
//!
//! The capability traits ([`ViewPlugin`], [`ScmPlugin`], ...) define the
//! surface each handler family exposes; the implementations live in the
//! `jenwire-plugins` crate.

pub mod error;
pub mod plugin;
pub mod registry;
pub mod resolver;
pub mod xml;

pub use error::{PluginError, PluginResult};
pub use plugin::{
    BuilderPlugin,
    CompositeView,
    PluginConstructor,
    PluginContext,
    PluginDescriptor,
    PluginHandle,
    PropertyPlugin,
    PublisherPlugin,
    ScmPlugin,
    ViewPlugin,
};
pub use registry::PluginRegistry;
pub use resolver::create_xml_plugin;
pub use xml::PluginType;
