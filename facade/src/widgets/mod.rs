pub mod carousel;
pub mod form;
pub mod nav_menu;
pub mod scroll_area;

use casement::element::{find_path_by_marker, element_at};
use casement::Element;

use crate::error::WidgetError;

/// Resolve a required marker to the ID of the element carrying it.
pub(crate) fn require_marker(root: &Element, key: &'static str) -> Result<String, WidgetError> {
    let path = find_path_by_marker(root, key).ok_or(WidgetError::MissingMarker(key))?;
    let element = element_at(root, &path).ok_or(WidgetError::MissingMarker(key))?;
    Ok(element.id.clone())
}
