/// Sizing along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Size to content.
    #[default]
    Auto,
    /// Fixed number of cells.
    Fixed(u16),
    /// Take the available space.
    Fill,
}

/// Main axis for stacking children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Overflow behavior per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Children may paint outside the element's rect.
    #[default]
    Visible,
    /// Children are clipped to the element's rect.
    Hidden,
    /// Clipped and offset by `scroll_offset`.
    Scroll,
}

/// How an element participates in its parent's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Stacked along the parent's direction.
    #[default]
    Flow,
    /// Taken out of the flow and placed at the parent's content origin,
    /// shifted by `left`/`top`. Does not contribute to content size.
    Overlay,
}
