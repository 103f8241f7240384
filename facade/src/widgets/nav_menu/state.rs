//! Tier tree bookkeeping: depth walking and active-flag queries.

use casement::element::{ancestors, Element, Path};

pub const TIER_CLASS: &str = "tier";
pub const ROOT_TIER_CLASS: &str = "tier-one";
pub const ACTIVE_CLASS: &str = "is-active";

/// Number of tier-list ancestors strictly below the slide target, found
/// by walking up from the element at `path`.
pub fn tier_depth(root: &Element, path: &Path, slide_id: &str) -> usize {
    let mut depth = 0;
    for ancestor in ancestors(root, path) {
        if ancestor.id == slide_id {
            break;
        }
        if ancestor.has_class(TIER_CLASS) {
            depth += 1;
        }
    }
    depth
}

/// ID of the nearest tier-list ancestor (the element's immediate parent
/// list in drill terms).
pub fn parent_tier_id(root: &Element, path: &Path, slide_id: &str) -> Option<String> {
    for ancestor in ancestors(root, path) {
        if ancestor.id == slide_id {
            break;
        }
        if ancestor.has_class(TIER_CLASS) {
            return Some(ancestor.id.clone());
        }
    }
    None
}

/// The currently active tier, falling back to the root tier.
pub fn visible_tier_id(root: &Element) -> Option<String> {
    if let Some(active) = find_by_class(root, ACTIVE_CLASS) {
        return Some(active);
    }
    find_by_class(root, ROOT_TIER_CLASS)
}

fn find_by_class(element: &Element, class: &str) -> Option<String> {
    if element.has_class(class) {
        return Some(element.id.clone());
    }
    for child in element.child_nodes() {
        if let Some(found) = find_by_class(child, class) {
            return Some(found);
        }
    }
    None
}
