mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::types::Tag;

/// Find an element by key in the tree.
pub fn find_element<'a>(root: &'a Element, key: &str) -> Option<&'a Element> {
    if root.key.as_deref() == Some(key) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, key) {
            return Some(found);
        }
    }

    None
}

/// Collect every element with the given tag, in document order.
pub fn find_all(root: &Element, tag: Tag) -> Vec<&Element> {
    let mut found = Vec::new();
    collect(root, tag, &mut found);
    found
}

fn collect<'a>(element: &'a Element, tag: Tag, found: &mut Vec<&'a Element>) {
    if element.tag == tag {
        found.push(element);
    }
    for child in element.child_elements() {
        collect(child, tag, found);
    }
}
