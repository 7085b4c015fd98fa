mod node;
mod tag;

pub use node::Element;
pub use tag::{InputType, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Collect IDs of all elements carrying `class`, in document order.
pub fn collect_by_class(root: &Element, class: &str, out: &mut Vec<String>) {
    if root.has_class(class) {
        out.push(root.id.clone());
    }
    for child in &root.children {
        collect_by_class(child, class, out);
    }
}

/// Insert `element` as the next sibling of the element with `sibling_id`.
///
/// Hands the element back if the sibling is not in the tree (or is the root).
pub(crate) fn insert_after(
    parent: &mut Element,
    sibling_id: &str,
    element: Element,
) -> Result<(), Element> {
    if let Some(pos) = parent.children.iter().position(|c| c.id == sibling_id) {
        parent.children.insert(pos + 1, element);
        return Ok(());
    }

    let mut element = element;
    for child in &mut parent.children {
        match insert_after(child, sibling_id, element) {
            Ok(()) => return Ok(()),
            Err(back) => element = back,
        }
    }
    Err(element)
}

/// Apply `f` to every element in the subtree, root first.
pub(crate) fn walk_mut(root: &mut Element, f: &mut impl FnMut(&mut Element)) {
    f(root);
    for child in &mut root.children {
        walk_mut(child, f);
    }
}
