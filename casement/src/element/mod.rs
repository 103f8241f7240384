mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Address of an element within a tree: child indexes from the root.
/// Ancestor relationships are expressed as path prefixes, which is how
/// "walk up through ancestors" works over an owned tree.
pub type Path = Vec<usize>;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Path to the first element (depth-first) matching the predicate.
pub fn find_path(root: &Element, pred: &dyn Fn(&Element) -> bool) -> Option<Path> {
    if pred(root) {
        return Some(Vec::new());
    }

    for (index, child) in root.child_nodes().iter().enumerate() {
        if let Some(mut path) = find_path(child, pred) {
            path.insert(0, index);
            return Some(path);
        }
    }

    None
}

/// Path to the first element carrying the given marker key.
pub fn find_path_by_marker(root: &Element, key: &str) -> Option<Path> {
    find_path(root, &|el| el.data.contains_key(key))
}

/// Path to the element with the given ID.
pub fn find_path_by_id(root: &Element, id: &str) -> Option<Path> {
    find_path(root, &|el| el.id == id)
}

/// Paths to every element matching the predicate, in document order.
pub fn collect_paths(root: &Element, pred: &dyn Fn(&Element) -> bool) -> Vec<Path> {
    let mut result = Vec::new();
    collect_paths_into(root, pred, &mut Vec::new(), &mut result);
    result
}

fn collect_paths_into(
    element: &Element,
    pred: &dyn Fn(&Element) -> bool,
    current: &mut Path,
    result: &mut Vec<Path>,
) {
    if pred(element) {
        result.push(current.clone());
    }
    for (index, child) in element.child_nodes().iter().enumerate() {
        current.push(index);
        collect_paths_into(child, pred, current, result);
        current.pop();
    }
}

/// Paths to every element carrying the given marker key.
pub fn collect_paths_by_marker(root: &Element, key: &str) -> Vec<Path> {
    collect_paths(root, &|el| el.data.contains_key(key))
}

/// Resolve a path to the element it addresses.
pub fn element_at<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    let mut current = root;
    for &index in path {
        current = current.child_nodes().get(index)?;
    }
    Some(current)
}

/// Resolve a path to the element it addresses, mutably.
pub fn element_at_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut current = root;
    for &index in path {
        current = current.child_nodes_mut().get_mut(index)?;
    }
    Some(current)
}

/// Ancestors of the element at `path`, innermost first, excluding the
/// element itself and including the root.
pub fn ancestors<'a>(root: &'a Element, path: &[usize]) -> Vec<&'a Element> {
    let mut chain = Vec::new();
    let mut current = root;
    chain.push(current);
    for &index in path {
        match current.child_nodes().get(index) {
            Some(child) => {
                current = child;
                chain.push(current);
            }
            None => break,
        }
    }
    // Drop the element itself, innermost ancestor first.
    chain.pop();
    chain.reverse();
    chain
}
