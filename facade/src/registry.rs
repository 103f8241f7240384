//! Inventory-based preset registration.
//!
//! Each widget ships one or more presentation presets: a named factory
//! producing a ready-to-run component with demo data. Presets register
//! themselves at link time and are discovered by the gallery.

use crate::component::Component;
use crate::error::WidgetError;

/// Preset entry for inventory.
pub struct PresetRegistration {
    /// Preset name, e.g. `"scroll-area/default"`.
    pub name: &'static str,
    /// One-line description shown in the gallery listing.
    pub description: &'static str,
    /// Factory building the demo component.
    pub build: fn() -> Result<Box<dyn Component>, WidgetError>,
}

impl PresetRegistration {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        build: fn() -> Result<Box<dyn Component>, WidgetError>,
    ) -> Self {
        Self {
            name,
            description,
            build,
        }
    }
}

inventory::collect!(PresetRegistration);

/// All registered presets.
pub fn registered_presets() -> impl Iterator<Item = &'static PresetRegistration> {
    inventory::iter::<PresetRegistration>.into_iter()
}

/// Look up a preset by name.
pub fn find_preset(name: &str) -> Option<&'static PresetRegistration> {
    registered_presets().find(|preset| preset.name == name)
}
