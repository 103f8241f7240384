use std::time::{Duration, Instant};

use casement::element::find_element;
use casement::{layout, Element, Event, MouseButton, Overflow, Rect, Size};
use facade::widgets::scroll_area::{ScrollArea, ScrollAreaOptions, MIN_KNOB_SIZE};
use facade::{Component, EventResult, WidgetError};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 100;

fn demo_tree(lines: u16, line_height: u16) -> Element {
    let items = (0..lines).map(|i| {
        Element::box_()
            .id(format!("line-{i}"))
            .height(Size::Fixed(line_height))
            .width(Size::Fill)
    });

    Element::row()
        .id("wrapper")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::col()
                .id("content")
                .data("scroll-content", "")
                .width(Size::Fill)
                .height(Size::Fill)
                .overflow_y(Overflow::Scroll)
                .child(
                    Element::col()
                        .id("inner")
                        .data("content-inner", "")
                        .width(Size::Fill)
                        .children(items),
                ),
        )
        .child(
            Element::col()
                .id("bar")
                .data("scroll-bar", "")
                .width(Size::Fixed(1))
                .height(Size::Fill)
                .child(
                    Element::box_()
                        .id("knob")
                        .data("scroll-knob", "")
                        .width(Size::Fill)
                        .height(Size::Fixed(1)),
                ),
        )
}

fn ready(lines: u16, opts: ScrollAreaOptions) -> (ScrollArea, casement::LayoutResult, Instant) {
    let now = Instant::now();
    let mut area = ScrollArea::new(demo_tree(lines, 2), opts).unwrap();
    let result = layout(area.root(), Rect::from_size(WIDTH, HEIGHT));
    area.after_layout(&result, now);
    let result = layout(area.root(), Rect::from_size(WIDTH, HEIGHT));
    (area, result, now)
}

#[test]
fn test_missing_marker_fails_construction() {
    let root = Element::col().id("empty");
    match ScrollArea::new(root, ScrollAreaOptions::default()) {
        Err(WidgetError::MissingMarker(marker)) => assert_eq!(marker, "scroll-content"),
        other => panic!("expected missing marker error, got {other:?}"),
    }
}

#[test]
fn test_overflow_is_extent_minus_viewport() {
    // 100 lines of 2 cells = 200 extent against a 100-cell viewport.
    let (area, _, _) = ready(100, ScrollAreaOptions::default());
    assert_eq!(area.geometry().overflow(), 100.0);
}

#[test]
fn test_overflow_clamped_when_content_fits() {
    let (area, _, _) = ready(10, ScrollAreaOptions::default());
    assert_eq!(area.geometry().overflow(), 0.0);
}

#[test]
fn test_knob_size_proportional() {
    // track=100, viewport=100, extent=200 -> knob 50.
    let (area, _, _) = ready(100, ScrollAreaOptions::default());
    assert_eq!(area.geometry().knob_size(), 50.0);
}

#[test]
fn test_knob_size_minimum() {
    // extent=2000 -> proportional knob would be 5; floor applies.
    let (area, _, _) = ready(1000, ScrollAreaOptions::default());
    assert_eq!(area.geometry().knob_size(), MIN_KNOB_SIZE);
}

#[test]
fn test_scroll_fraction_round_trip() {
    let (mut area, result, now) = ready(100, ScrollAreaOptions::default());
    let overflow = area.geometry().overflow();

    for fraction in [0.0f32, 0.25, 0.5, 1.0] {
        area.scroll_to((fraction * overflow).round() as u16);
        area.update(&result, now);
        let derived = area.geometry().fraction_for_knob(area.knob_offset());
        assert!(
            (derived - fraction).abs() < 0.03,
            "fraction {fraction} derived {derived}"
        );
    }
}

#[test]
fn test_drag_to_track_end_reaches_overflow() {
    let (mut area, result, now) = ready(100, ScrollAreaOptions::default());

    // Knob rests at the top of the bar (x=39).
    let grab = area.handle(
        &Event::Click {
            x: 39,
            y: 0,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    assert_eq!(grab, EventResult::StartDrag);
    assert!(area.is_dragging());

    // Drag far past the end of the track; the offset clamps.
    area.handle(
        &Event::Drag {
            x: 39,
            y: 200,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    assert_eq!(area.scroll_offset(), area.geometry().overflow() as u16);

    area.handle(
        &Event::Release {
            x: 39,
            y: 200,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    assert!(!area.is_dragging());
}

#[test]
fn test_wheel_scroll_moves_knob() {
    let (mut area, result, now) = ready(100, ScrollAreaOptions::default());

    for _ in 0..5 {
        area.handle(
            &Event::Scroll {
                x: 5,
                y: 5,
                delta_x: 0,
                delta_y: 1,
            },
            &result,
            now,
        );
    }
    assert_eq!(area.scroll_offset(), 10);
    let expected = area.geometry().knob_for_scroll(10.0);
    assert_eq!(area.knob_offset(), expected);
    assert!(expected > 0.0);
}

#[test]
fn test_zero_range_maps_to_fraction_zero() {
    let (area, _, _) = ready(10, ScrollAreaOptions::default());
    // Content fits: knob spans the track and every lookup degrades to 0.
    assert_eq!(area.geometry().knob_range(), 0.0);
    assert_eq!(area.geometry().fraction_for_knob(25.0), 0.0);
    assert_eq!(area.geometry().knob_for_scroll(25.0), 0.0);
}

#[test]
fn test_update_is_idempotent() {
    let (mut area, result, now) = ready(100, ScrollAreaOptions::default());
    area.update(&result, now);
    let knob = area.geometry().knob_size();
    let offset = area.knob_offset();
    area.update(&result, now);
    assert_eq!(area.geometry().knob_size(), knob);
    assert_eq!(area.knob_offset(), offset);
}

#[test]
fn test_beside_bar_reserves_content_space() {
    let opts = ScrollAreaOptions {
        inside: false,
        ..Default::default()
    };
    let (area, _, _) = ready(100, opts);
    let inner = find_element(area.root(), "inner").unwrap();
    // Wrapper is 40 wide and the bar takes 1 cell beside the content.
    assert_eq!(inner.width, Size::Fixed(39));
}

#[test]
fn test_idle_hide_schedules_after_delay() {
    let opts = ScrollAreaOptions {
        hide_bar: true,
        hide_delay: Duration::from_millis(800),
        ..Default::default()
    };
    let (mut area, result, now) = ready(100, opts);

    area.handle(
        &Event::Scroll {
            x: 5,
            y: 5,
            delta_x: 0,
            delta_y: 1,
        },
        &result,
        now,
    );
    assert_eq!(area.hide_deadline(), Some(now + Duration::from_millis(800)));

    // A new qualifying event within the window replaces the deadline.
    let later = now + Duration::from_millis(400);
    area.handle(
        &Event::Scroll {
            x: 5,
            y: 5,
            delta_x: 0,
            delta_y: 1,
        },
        &result,
        later,
    );
    assert_eq!(
        area.hide_deadline(),
        Some(later + Duration::from_millis(800))
    );

    // Fade in completes while the timer pends.
    area.tick(later + Duration::from_millis(300));
    assert!(area.bar_opacity() > 0.99);

    // After the deadline the bar fades back out.
    area.tick(later + Duration::from_millis(801));
    area.tick(later + Duration::from_millis(1100));
    assert!(area.bar_opacity() < 0.01);
    assert_eq!(area.hide_deadline(), None);
}

#[test]
fn test_hover_cancels_pending_hide() {
    let opts = ScrollAreaOptions {
        hide_bar: true,
        ..Default::default()
    };
    let (mut area, result, now) = ready(100, opts);

    area.handle(
        &Event::Scroll {
            x: 5,
            y: 5,
            delta_x: 0,
            delta_y: 1,
        },
        &result,
        now,
    );
    assert!(area.hide_deadline().is_some());

    // Hover over the bar cancels the pending hide.
    area.handle(&Event::MouseMove { x: 39, y: 10 }, &result, now);
    assert_eq!(area.hide_deadline(), None);

    // Leaving re-arms it.
    area.handle(&Event::MouseMove { x: 5, y: 10 }, &result, now);
    assert!(area.hide_deadline().is_some());
}

#[test]
fn test_native_scroll_ignored_while_dragging() {
    let (mut area, result, now) = ready(100, ScrollAreaOptions::default());

    area.handle(
        &Event::Click {
            x: 39,
            y: 0,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    area.handle(
        &Event::Drag {
            x: 39,
            y: 25,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    let dragged_to = area.knob_offset();
    assert!(dragged_to > 0.0);

    // A competing scroll sync does not move the knob mid-drag.
    area.on_scroll(now);
    assert_eq!(area.knob_offset(), dragged_to);
}

#[test]
fn test_dispose_cancels_timers() {
    let opts = ScrollAreaOptions {
        hide_bar: true,
        ..Default::default()
    };
    let (mut area, result, now) = ready(100, opts);
    area.handle(
        &Event::Scroll {
            x: 5,
            y: 5,
            delta_x: 0,
            delta_y: 1,
        },
        &result,
        now,
    );
    assert!(area.hide_deadline().is_some());

    area.dispose();
    assert!(area.hide_deadline().is_none());
    assert!(!area.is_dragging());

    // Events after disposal do not reach the widget.
    let result_after = area.handle(
        &Event::Scroll {
            x: 5,
            y: 5,
            delta_x: 0,
            delta_y: 1,
        },
        &result,
        now,
    );
    assert_eq!(result_after, EventResult::Ignored);
}
