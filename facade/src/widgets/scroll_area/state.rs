//! Derived scrollbar geometry.

use std::time::Duration;

/// Scroll axis. Fixed per instance; every geometry lookup branches on
/// this one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Scroll area configuration. Each option is independently toggleable.
#[derive(Debug, Clone)]
pub struct ScrollAreaOptions {
    /// Render the bar over the content instead of beside it.
    pub inside: bool,
    /// Auto-hide the bar after `hide_delay` of idle time.
    pub hide_bar: bool,
    /// Idle delay before the bar fades out.
    pub hide_delay: Duration,
    /// Horizontal orientation (width/scroll-x family of lookups).
    pub horizontal: bool,
    /// Auto-size the inner content wrapper's cross axis.
    pub set_content_size: bool,
}

impl Default for ScrollAreaOptions {
    fn default() -> Self {
        Self {
            inside: true,
            hide_bar: false,
            hide_delay: Duration::from_millis(800),
            horizontal: false,
            set_content_size: true,
        }
    }
}

impl ScrollAreaOptions {
    pub fn axis(&self) -> Axis {
        if self.horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// Minimum knob length along the track.
pub const MIN_KNOB_SIZE: f32 = 20.0;

/// Knob/track geometry derived from content geometry. Maps knob
/// positions and scroll offsets onto each other in both directions.
#[derive(Debug)]
pub struct ScrollGeometry {
    overflow: f32,
    bar_size: f32,
    bar_size_cross: f32,
    knob_size: f32,
}

impl ScrollGeometry {
    pub fn new() -> Self {
        Self {
            overflow: 0.0,
            bar_size: 0.0,
            bar_size_cross: 0.0,
            knob_size: 0.0,
        }
    }

    /// Recompute from current layout. Safe to call repeatedly.
    pub fn recompute(&mut self, viewport: f32, extent: f32, track: f32, track_cross: f32) {
        self.overflow = (extent - viewport).max(0.0);
        self.bar_size = track;
        self.bar_size_cross = track_cross;
        if viewport > 0.0 && extent > 0.0 {
            self.knob_size = (track * (viewport / extent))
                .max(MIN_KNOB_SIZE)
                .min(track)
                .round();
        } else {
            // Nothing to measure against: the knob spans the track.
            self.knob_size = track;
        }
    }

    pub fn overflow(&self) -> f32 {
        self.overflow
    }

    pub fn bar_size(&self) -> f32 {
        self.bar_size
    }

    pub fn bar_size_cross(&self) -> f32 {
        self.bar_size_cross
    }

    pub fn knob_size(&self) -> f32 {
        self.knob_size
    }

    /// Distance the knob can travel along the track.
    pub fn knob_range(&self) -> f32 {
        (self.bar_size - self.knob_size).max(0.0)
    }

    /// Fraction of travel for a knob offset. A zero range maps to 0
    /// rather than dividing by zero.
    pub fn fraction_for_knob(&self, knob_offset: f32) -> f32 {
        let range = self.knob_range();
        if range <= 0.0 {
            0.0
        } else {
            (knob_offset / range).clamp(0.0, 1.0)
        }
    }

    /// Content scroll offset for a knob position, rounded to the nearest
    /// cell.
    pub fn scroll_for_knob(&self, knob_offset: f32) -> u16 {
        (self.overflow * self.fraction_for_knob(knob_offset)).round() as u16
    }

    /// Knob position for a content scroll offset. Zero overflow maps to
    /// fraction 0 instead of propagating a NaN.
    pub fn knob_for_scroll(&self, scroll: f32) -> f32 {
        let fraction = if self.overflow <= 0.0 {
            0.0
        } else {
            (scroll / self.overflow).clamp(0.0, 1.0)
        };
        (self.knob_range() * fraction).round()
    }
}

impl Default for ScrollGeometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_clamps_to_zero() {
        let mut geometry = ScrollGeometry::new();
        geometry.recompute(100.0, 60.0, 100.0, 1.0);
        assert_eq!(geometry.overflow(), 0.0);
    }

    #[test]
    fn knob_respects_minimum() {
        let mut geometry = ScrollGeometry::new();
        geometry.recompute(10.0, 1000.0, 100.0, 1.0);
        assert_eq!(geometry.knob_size(), MIN_KNOB_SIZE);
    }

    #[test]
    fn zero_range_maps_to_fraction_zero() {
        let mut geometry = ScrollGeometry::new();
        geometry.recompute(100.0, 100.0, 50.0, 1.0);
        assert_eq!(geometry.fraction_for_knob(10.0), 0.0);
        assert_eq!(geometry.knob_for_scroll(10.0), 0.0);
    }
}
