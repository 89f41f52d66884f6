use xmltree::Element;

/// Text content of a direct child element, empty when the child is absent
/// or has no text.
pub(crate) fn child_text(element: &Element, name: &str) -> String {
    element
        .get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.into_owned())
        .unwrap_or_default()
}
