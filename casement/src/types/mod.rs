mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Direction, Overflow, Position, Size};
pub use style::{Style, TextStyle};
