mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::{Direction, Overflow, Position, Size};

/// Computed layout: final screen rect per element, plus natural content
/// and viewport sizes for scrolling containers.
#[derive(Debug, Default, Clone)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    /// Unclipped placement per element: x, y (may be negative while
    /// translated off screen) and the unclipped size.
    frames: HashMap<String, (i32, i32, u16, u16)>,
    content: HashMap<String, (u16, u16)>,
    viewports: HashMap<String, (u16, u16)>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// Unclipped placement of an element, usable even while it sits
    /// outside the screen.
    pub fn frame(&self, id: &str) -> Option<(i32, i32, u16, u16)> {
        self.frames.get(id).copied()
    }

    /// Natural (unclipped) content size of a scrolling container.
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content.get(id).copied()
    }

    /// Inner size of a scrolling container (rect minus padding).
    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewports.get(id).copied()
    }
}

/// Lay out the tree into `available`, producing final screen rects.
/// Scroll offsets, `left`/`top` offsets and translations are applied
/// here, so rects are directly usable for hit testing.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve(root.width, available.width, || {
        content_width(root, available.width)
    });
    let height = resolve(root.height, available.height, || {
        content_height(root, available.height)
    });
    place(
        root,
        available.x as i32,
        available.y as i32,
        width,
        height,
        &mut result,
    );
    result
}

fn resolve(size: Size, bound: u16, natural: impl FnOnce() -> u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => bound,
        Size::Auto => natural().min(bound),
    }
}

/// Natural width of an element when sized to content.
fn content_width(element: &Element, bound: u16) -> u16 {
    let pad = element.padding * 2;
    let inner = match &element.content {
        Content::None => 0,
        Content::Text(text) => text.width() as u16,
        Content::TextInput {
            value, placeholder, ..
        } => {
            let hint = placeholder.as_deref().unwrap_or("");
            (value.width().max(hint.width()) as u16).saturating_add(1)
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position == Position::Flow);
            match element.direction {
                Direction::Row => {
                    let mut total = 0u16;
                    let mut count = 0u16;
                    for child in flow {
                        total = total.saturating_add(measure_width(child, bound));
                        count += 1;
                    }
                    total.saturating_add(element.gap * count.saturating_sub(1))
                }
                Direction::Column => flow
                    .map(|child| measure_width(child, bound))
                    .max()
                    .unwrap_or(0),
            }
        }
    };
    inner.saturating_add(pad)
}

/// Natural height of an element when sized to content.
fn content_height(element: &Element, bound: u16) -> u16 {
    let pad = element.padding * 2;
    let inner = match &element.content {
        Content::None => 0,
        Content::Text(_) | Content::TextInput { .. } => 1,
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position == Position::Flow);
            match element.direction {
                Direction::Column => {
                    let mut total = 0u16;
                    let mut count = 0u16;
                    for child in flow {
                        total = total.saturating_add(measure_height(child, bound));
                        count += 1;
                    }
                    total.saturating_add(element.gap * count.saturating_sub(1))
                }
                Direction::Row => flow
                    .map(|child| measure_height(child, bound))
                    .max()
                    .unwrap_or(0),
            }
        }
    };
    inner.saturating_add(pad)
}

// When measuring for content size, Fill resolves like Auto so that an
// Auto parent is not inflated to its own bound.
fn measure_width(element: &Element, bound: u16) -> u16 {
    match element.width {
        Size::Fixed(n) => n,
        _ => content_width(element, bound).min(bound),
    }
}

fn measure_height(element: &Element, bound: u16) -> u16 {
    match element.height {
        Size::Fixed(n) => n,
        _ => content_height(element, bound).min(bound),
    }
}

fn place(
    element: &Element,
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    result: &mut LayoutResult,
) {
    result
        .rects
        .insert(element.id.clone(), clamp_rect(x, y, width, height));
    result
        .frames
        .insert(element.id.clone(), (x, y, width, height));

    let children = match &element.content {
        Content::Children(children) => children,
        _ => return,
    };

    let pad = element.padding;
    let inner_x = x + pad as i32;
    let inner_y = y + pad as i32;
    let inner_w = width.saturating_sub(pad * 2);
    let inner_h = height.saturating_sub(pad * 2);

    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position == Position::Flow)
        .collect();

    // Resolve child sizes along the main and cross axes.
    let (inner_main, inner_cross) = match element.direction {
        Direction::Row => (inner_w, inner_h),
        Direction::Column => (inner_h, inner_w),
    };

    let mut mains: Vec<u16> = Vec::with_capacity(flow.len());
    let mut fill_count = 0u16;
    let mut used = 0u16;
    for child in &flow {
        let main = match element.direction {
            Direction::Row => child.width,
            Direction::Column => child.height,
        };
        match main {
            Size::Fixed(n) => {
                mains.push(n);
                used = used.saturating_add(n);
            }
            Size::Auto => {
                let n = match element.direction {
                    Direction::Row => measure_width(child, inner_w),
                    Direction::Column => measure_height(child, inner_h),
                };
                mains.push(n);
                used = used.saturating_add(n);
            }
            Size::Fill => {
                mains.push(0);
                fill_count += 1;
            }
        }
    }
    let gaps = element.gap * (flow.len() as u16).saturating_sub(1);
    if fill_count > 0 {
        let remaining = inner_main.saturating_sub(used).saturating_sub(gaps);
        let share = remaining / fill_count;
        let mut extra = remaining % fill_count;
        for (child, main) in flow.iter().zip(mains.iter_mut()) {
            let is_fill = match element.direction {
                Direction::Row => child.width == Size::Fill,
                Direction::Column => child.height == Size::Fill,
            };
            if is_fill {
                *main = share + if extra > 0 { 1 } else { 0 };
                extra = extra.saturating_sub(1);
            }
        }
    }

    let content_main: u16 = mains.iter().fold(0u16, |acc, m| acc.saturating_add(*m)) + gaps;
    let mut content_cross = 0u16;
    let mut crosses: Vec<u16> = Vec::with_capacity(flow.len());
    for child in &flow {
        let cross_size = match element.direction {
            Direction::Row => child.height,
            Direction::Column => child.width,
        };
        let cross = match cross_size {
            Size::Fixed(n) => n,
            Size::Fill => inner_cross,
            Size::Auto => {
                let n = match element.direction {
                    Direction::Row => measure_height(child, inner_h),
                    Direction::Column => measure_width(child, inner_w),
                };
                n.min(inner_cross)
            }
        };
        crosses.push(cross);
        content_cross = content_cross.max(cross);
    }

    let (content_w, content_h) = match element.direction {
        Direction::Row => (content_main, content_cross),
        Direction::Column => (content_cross, content_main),
    };
    if element.overflow_x == Overflow::Scroll || element.overflow_y == Overflow::Scroll {
        result
            .content
            .insert(element.id.clone(), (content_w, content_h));
        result
            .viewports
            .insert(element.id.clone(), (inner_w, inner_h));
    }

    // Walk the flow, shifted by the scroll offset where scrolling.
    let mut cursor = match element.direction {
        Direction::Row => inner_x,
        Direction::Column => inner_y,
    };
    if element.overflow_x == Overflow::Scroll && element.direction == Direction::Row {
        cursor -= element.scroll_offset.0 as i32;
    }
    if element.overflow_y == Overflow::Scroll && element.direction == Direction::Column {
        cursor -= element.scroll_offset.1 as i32;
    }
    let cross_start = match element.direction {
        Direction::Row => inner_y
            - if element.overflow_y == Overflow::Scroll {
                element.scroll_offset.1 as i32
            } else {
                0
            },
        Direction::Column => inner_x
            - if element.overflow_x == Overflow::Scroll {
                element.scroll_offset.0 as i32
            } else {
                0
            },
    };

    for ((child, main), cross) in flow.iter().zip(mains.iter()).zip(crosses.iter()) {
        let (cw, ch) = match element.direction {
            Direction::Row => (*main, *cross),
            Direction::Column => (*cross, *main),
        };
        let (mut cx, mut cy) = match element.direction {
            Direction::Row => (cursor, cross_start),
            Direction::Column => (cross_start, cursor),
        };
        cx += child.left as i32 + translate_x(child, cw);
        cy += child.top as i32 + child.translate_y as i32;
        place(child, cx, cy, cw, ch, result);
        cursor += *main as i32 + element.gap as i32;
    }

    // Overlay children are placed against the content origin and do not
    // participate in the flow.
    for child in children.iter().filter(|c| c.position == Position::Overlay) {
        let cw = resolve(child.width, inner_w, || content_width(child, inner_w));
        let ch = resolve(child.height, inner_h, || content_height(child, inner_h));
        let cx = inner_x + child.left as i32 + translate_x(child, cw);
        let cy = inner_y + child.top as i32 + child.translate_y as i32;
        place(child, cx, cy, cw, ch, result);
    }
}

fn translate_x(element: &Element, width: u16) -> i32 {
    (element.translate_x_pct / 100.0 * width as f32).round() as i32
}

fn clamp_rect(x: i32, y: i32, width: u16, height: u16) -> Rect {
    let mut w = width as i32;
    let mut h = height as i32;
    let mut cx = x;
    let mut cy = y;
    if cx < 0 {
        w += cx;
        cx = 0;
    }
    if cy < 0 {
        h += cy;
        cy = 0;
    }
    Rect::new(
        cx.clamp(0, u16::MAX as i32) as u16,
        cy.clamp(0, u16::MAX as i32) as u16,
        w.max(0) as u16,
        h.max(0) as u16,
    )
}
