//! Wrapper around the `config.xml` document of a view.

use jenwire_plugin_api::PluginResult;
use xmltree::{Element, XMLNode};

pub struct ViewXml {
    root: Element,
}

impl ViewXml {
    pub fn parse(xml: &str) -> PluginResult<Self> {
        Ok(Self {
            root: Element::parse(xml.as_bytes())?,
        })
    }

    /// The view type descriptor, i.e. the document's root tag.
    pub fn type_name(&self) -> &str {
        &self.root.name
    }

    /// Changes the display name stored in the configuration. Used when
    /// cloning a view under a new name.
    pub fn rename(&mut self, new_name: &str) {
        if self.root.get_child("name").is_none() {
            self.root
                .children
                .push(XMLNode::Element(Element::new("name")));
        }
        if let Some(node) = self.root.get_mut_child("name") {
            node.children.clear();
            node.children.push(XMLNode::Text(new_name.to_string()));
        }
    }

    pub fn to_xml(&self) -> PluginResult<String> {
        let mut buffer = Vec::new();
        self.root.write(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
