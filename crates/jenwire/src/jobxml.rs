//! Wrapper around the raw `config.xml` for a Jenkins job.
//!
//! The source XML can be loaded from nearly any job URL by appending
//! `/config.xml`. Structured edits happen on the parsed document; call
//! [`to_xml`](JobXml::to_xml) to export the result for re-posting.

use jenwire_core::RestClient;
use jenwire_plugin_api::{
    create_xml_plugin,
    BuilderPlugin,
    PluginError,
    PluginHandle,
    PluginType,
    PropertyPlugin,
    PublisherPlugin,
    ScmPlugin,
};
use xmltree::{Element, XMLNode};

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct JobXml {
    root: Element,
}

impl JobXml {
    /// Parses a job configuration document. The root element must be
    /// `<project>`.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = Element::parse(xml.as_bytes())?;
        if root.name != "project" {
            return Err(Error::UnexpectedDocument {
                expected: "project",
                found: root.name,
            });
        }
        Ok(Self { root })
    }

    /// The local path of the custom workspace, when the job uses one.
    pub fn custom_workspace(&self) -> Option<String> {
        self.child_text("customWorkspace")
    }

    /// Sets a new or modified custom workspace for the job.
    pub fn set_custom_workspace(&mut self, path: &str) {
        self.set_child_text("customWorkspace", path);
    }

    /// Removes the custom workspace configuration. Does nothing when the
    /// job is not using one.
    pub fn disable_custom_workspace(&mut self) {
        self.root.take_child("customWorkspace");
    }

    /// The build agent label this job is tied to.
    pub fn assigned_node(&self) -> Option<String> {
        self.child_text("assignedNode")
    }

    pub fn set_assigned_node(&mut self, node_label: &str) {
        self.set_child_text("assignedNode", node_label);
    }

    /// Exports the processed XML, including any edits applied to this
    /// object, for import into a Jenkins job.
    pub fn to_xml(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.root.write(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// The handler for the source-control descriptor of the job.
    ///
    /// Every job carries an `<scm>` element, so this is a site where an
    /// unsupported type is fatal: the error carries the unresolved type
    /// identifier instead of silently skipping it.
    pub fn scm(&self, controller: &RestClient) -> Result<Box<dyn ScmPlugin>> {
        let node = self.root.get_child("scm").ok_or_else(|| {
            Error::UnexpectedResponse("job configuration declares no scm element".to_string())
        })?;
        let registry = jenwire_plugins::global()?;
        let plugin_type = PluginType::from_element(node);

        match create_xml_plugin(&registry, node, controller, controller) {
            Some(handle) => handle
                .into_scm()
                .ok_or_else(|| Error::Plugin(PluginError::NotSupported(plugin_type))),
            None => Err(Error::Plugin(PluginError::NotSupported(plugin_type))),
        }
    }

    /// Handlers for the job's property list. Unsupported property types
    /// are logged and skipped.
    pub fn properties(&self, controller: &RestClient) -> Result<Vec<Box<dyn PropertyPlugin>>> {
        self.resolve_list("properties", "property", controller, PluginHandle::into_property)
    }

    /// Handlers for the job's post-build publisher list. Unsupported
    /// publisher types are logged and skipped.
    pub fn publishers(&self, controller: &RestClient) -> Result<Vec<Box<dyn PublisherPlugin>>> {
        self.resolve_list(
            "publishers",
            "publisher",
            controller,
            PluginHandle::into_publisher,
        )
    }

    /// Handlers for the job's build step list. Unsupported builder types
    /// are logged and skipped.
    pub fn builders(&self, controller: &RestClient) -> Result<Vec<Box<dyn BuilderPlugin>>> {
        self.resolve_list("builders", "builder", controller, PluginHandle::into_builder)
    }

    fn resolve_list<T>(
        &self,
        list_name: &str,
        family: &str,
        controller: &RestClient,
        extract: fn(PluginHandle) -> Option<T>,
    ) -> Result<Vec<T>> {
        let mut result = Vec::new();
        let Some(list) = self.root.get_child(list_name) else {
            return Ok(result);
        };

        let registry = jenwire_plugins::global()?;
        for node in list.children.iter().filter_map(XMLNode::as_element) {
            match create_xml_plugin(&registry, node, controller, controller).and_then(extract) {
                Some(plugin) => result.push(plugin),
                None => tracing::warn!(
                    plugin_type = %PluginType::from_element(node),
                    "unsupported job {family} plugin, skipping"
                ),
            }
        }
        Ok(result)
    }

    fn child_text(&self, name: &str) -> Option<String> {
        self.root
            .get_child(name)
            .and_then(|node| node.get_text())
            .map(|text| text.into_owned())
    }

    fn set_child_text(&mut self, name: &str, value: &str) {
        if self.root.get_child(name).is_none() {
            self.root.children.push(XMLNode::Element(Element::new(name)));
        }
        if let Some(node) = self.root.get_mut_child(name) {
            node.children.clear();
            node.children.push(XMLNode::Text(value.to_string()));
        }
    }
}
