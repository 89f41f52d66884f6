//! Resolution of live views against the shared registry.

use jenwire_core::RestClient;
use jenwire_plugin_api::{create_xml_plugin, PluginResult, PluginType, ViewPlugin};
use xmltree::Element;

use crate::registry;

/// Resolves the view behind `controller` by fetching its `config.xml` and
/// matching the declared type against the registry.
///
/// Unknown or future view types are not an error here: they are logged and
/// reported as `None` so listings can skip them.
pub async fn resolve_view(
    controller: &RestClient,
    root: &RestClient,
) -> PluginResult<Option<Box<dyn ViewPlugin>>> {
    let xml = controller.config_xml().await?;
    let element = Element::parse(xml.as_bytes())?;
    let registry = registry::global()?;

    match create_xml_plugin(&registry, &element, controller, root) {
        Some(handle) => match handle.into_view() {
            Some(view) => Ok(Some(view)),
            None => {
                tracing::warn!(
                    url = controller.url(),
                    "resolved plugin is not a view type, skipping"
                );
                Ok(None)
            }
        },
        None => {
            tracing::warn!(
                url = controller.url(),
                plugin_type = %PluginType::from_element(&element),
                "unsupported view type, skipping"
            );
            Ok(None)
        }
    }
}
