//! Interface to the Subversion SCM plugin.

use jenwire_plugin_api::{PluginContext, PluginDescriptor, PluginHandle, ScmPlugin};
use xmltree::Element;

use crate::util::child_text;

pub const CLASS_NAME: &str = "hudson.scm.SubversionSCM";

/// One checkout location configured on a Subversion SCM block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLocation {
    /// Repository URL checked out by the job.
    pub remote: String,
    /// Path under the workspace the checkout lands in.
    pub local: String,
}

#[derive(Debug)]
pub struct Subversion {
    element: Element,
}

impl Subversion {
    fn new(ctx: PluginContext) -> Self {
        Self {
            element: ctx.element,
        }
    }

    /// The repository locations this job checks out.
    pub fn locations(&self) -> Vec<ModuleLocation> {
        let Some(locations) = self.element.get_child("locations") else {
            return Vec::new();
        };
        locations
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .map(|entry| ModuleLocation {
                remote: child_text(entry, "remote"),
                local: child_text(entry, "local"),
            })
            .collect()
    }
}

impl ScmPlugin for Subversion {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn element(&self) -> &Element {
        &self.element
    }
}

pub(crate) fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        class_name: CLASS_NAME,
        construct: |ctx| PluginHandle::Scm(Box::new(Subversion::new(ctx))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <scm class="hudson.scm.SubversionSCM" plugin="subversion@1.53">
            <locations>
                <hudson.scm.SubversionSCM_-ModuleLocation>
                    <remote>http://repository/project/trunk</remote>
                    <local>.</local>
                    <depthOption>infinity</depthOption>
                    <ignoreExternalsOption>false</ignoreExternalsOption>
                </hudson.scm.SubversionSCM_-ModuleLocation>
            </locations>
            <excludedRegions/>
        </scm>"#;

    #[test]
    fn test_locations() {
        let svn = Subversion {
            element: Element::parse(SAMPLE.as_bytes()).unwrap(),
        };
        assert_eq!(
            svn.locations(),
            vec![ModuleLocation {
                remote: "http://repository/project/trunk".to_string(),
                local: ".".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_locations_block() {
        let svn = Subversion {
            element: Element::parse(r#"<scm class="hudson.scm.SubversionSCM"/>"#.as_bytes())
                .unwrap(),
        };
        assert!(svn.locations().is_empty());
    }
}
