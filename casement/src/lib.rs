pub mod buffer;
pub mod element;
pub mod event;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod timer;
pub mod transitions;
pub mod tween;
pub mod types;

pub use buffer::Buffer;
pub use element::{Content, Element, Path};
pub use event::{convert_event, Event, Key, Modifiers, MouseButton};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use timer::OneShot;
pub use transitions::{Easing, TransitionConfig};
pub use tween::{TweenProperty, TweenState};
pub use types::*;
