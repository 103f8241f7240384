use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::types::{Color, Overflow, Rgb, TextStyle};

/// Display width of a character in terminal cells.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Paint the tree into the buffer using previously computed layout.
/// Elements position by their unclipped frames, so containers shifted
/// partially off screen still paint the visible part of their subtree.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buffer: &mut Buffer) {
    let screen = Rect::from_size(buffer.width(), buffer.height());
    render_element(root, layout, buffer, screen, Rgb::new(0, 0, 0), 1.0);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buffer: &mut Buffer,
    clip: Rect,
    backdrop: Rgb,
    opacity: f32,
) {
    let Some((fx, fy, fw, fh)) = layout.frame(&element.id) else {
        return;
    };

    let opacity = (opacity * element.style.opacity).clamp(0.0, 1.0);
    // Fully faded subtrees are not painted at all.
    if opacity <= 0.01 {
        return;
    }

    let area = frame_intersect(fx, fy, fw, fh, clip);
    let mut backdrop = backdrop;

    if let Some(bg) = &element.style.background {
        let blended = blend(bg, backdrop, opacity);
        fill(buffer, area, blended);
        backdrop = blended;
    }

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|color| blend(color, backdrop, opacity))
        .unwrap_or_else(|| blend(&Color::rgb(255, 255, 255), backdrop, opacity));

    match &element.content {
        Content::Text(text) => {
            draw_text(buffer, area, fx, fy, text, fg, backdrop, element.style.text_style);
        }
        Content::TextInput {
            value,
            placeholder,
            focused,
        } => {
            let mut style = element.style.text_style;
            if *focused {
                style.underline = true;
            }
            if value.is_empty() {
                if let Some(hint) = placeholder {
                    let mut dim = style;
                    dim.dim = true;
                    draw_text(buffer, area, fx, fy, hint, fg, backdrop, dim);
                }
            } else {
                draw_text(buffer, area, fx, fy, value, fg, backdrop, style);
            }
        }
        Content::Children(children) => {
            let child_clip = child_clip(element, fx, fy, fw, fh, clip);
            for child in children {
                render_element(child, layout, buffer, child_clip, backdrop, opacity);
            }
        }
        Content::None => {}
    }
}

fn frame_intersect(fx: i32, fy: i32, fw: u16, fh: u16, clip: Rect) -> Rect {
    let x1 = fx.max(clip.x as i32);
    let y1 = fy.max(clip.y as i32);
    let x2 = (fx + fw as i32).min(clip.right() as i32);
    let y2 = (fy + fh as i32).min(clip.bottom() as i32);
    if x2 <= x1 || y2 <= y1 {
        Rect::default()
    } else {
        Rect::new(x1 as u16, y1 as u16, (x2 - x1) as u16, (y2 - y1) as u16)
    }
}

// Clip per axis: a non-visible overflow axis confines children to the
// element's padded frame; a visible axis passes the incoming clip on.
fn child_clip(element: &Element, fx: i32, fy: i32, fw: u16, fh: u16, clip: Rect) -> Rect {
    let pad = element.padding as i32;
    let mut out = clip;
    if element.overflow_x != Overflow::Visible {
        let x1 = (fx + pad).max(clip.x as i32);
        let x2 = (fx + fw as i32 - pad).min(clip.right() as i32);
        out.x = x1.max(0) as u16;
        out.width = (x2 - x1.max(0)).max(0) as u16;
    }
    if element.overflow_y != Overflow::Visible {
        let y1 = (fy + pad).max(clip.y as i32);
        let y2 = (fy + fh as i32 - pad).min(clip.bottom() as i32);
        out.y = y1.max(0) as u16;
        out.height = (y2 - y1.max(0)).max(0) as u16;
    }
    out
}

fn fill(buffer: &mut Buffer, area: Rect, bg: Rgb) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer.set(
                x,
                y,
                Cell {
                    char: ' ',
                    fg: Rgb::new(255, 255, 255),
                    bg,
                    style: TextStyle::default(),
                    wide_continuation: false,
                },
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    buffer: &mut Buffer,
    area: Rect,
    fx: i32,
    fy: i32,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
) {
    if area.is_empty() {
        return;
    }
    if fy < area.top() as i32 || fy >= area.bottom() as i32 {
        return;
    }
    let y = fy as u16;
    let mut x = fx;
    for c in text.chars() {
        let w = char_width(c) as i32;
        if w == 0 {
            continue;
        }
        if x + w > area.right() as i32 {
            break;
        }
        if x >= area.left() as i32 {
            buffer.set(
                x as u16,
                y,
                Cell {
                    char: c,
                    fg,
                    bg,
                    style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                buffer.set(
                    x as u16 + 1,
                    y,
                    Cell {
                        char: ' ',
                        fg,
                        bg,
                        style,
                        wide_continuation: true,
                    },
                );
            }
        }
        x += w;
    }
}

fn blend(color: &Color, backdrop: Rgb, opacity: f32) -> Rgb {
    if opacity >= 1.0 {
        return color.to_rgb();
    }
    let back = Color::Rgb {
        r: backdrop.r,
        g: backdrop.g,
        b: backdrop.b,
    };
    Color::lerp(&back, color, opacity).to_rgb()
}
