pub mod breakpoint;
pub mod component;
pub mod disposal;
pub mod error;
pub mod registry;
pub mod runtime;
pub mod theme;
pub mod widgets;

pub use component::{Component, EventResult};
pub use error::{RuntimeError, WidgetError};
pub use registry::{find_preset, registered_presets, PresetRegistration};
pub use runtime::Runtime;

pub mod prelude {
    pub use crate::breakpoint::{Breakpoint, BreakpointWatcher};
    pub use crate::component::{Component, EventResult};
    pub use crate::disposal::Disposables;
    pub use crate::error::{RuntimeError, WidgetError};
    pub use crate::registry::{find_preset, registered_presets, PresetRegistration};
    pub use crate::runtime::Runtime;
    pub use crate::theme::Theme;
    pub use crate::widgets::carousel::Carousel;
    pub use crate::widgets::form::{Form, FormValidator, Rule, ValidationResult};
    pub use crate::widgets::nav_menu::NavMenu;
    pub use crate::widgets::scroll_area::{Axis, ScrollArea, ScrollAreaOptions};
}
