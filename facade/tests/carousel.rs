use std::time::{Duration, Instant};

use casement::element::find_element;
use casement::{layout, Element, Event, MouseButton, Overflow, Rect, Size};
use facade::widgets::carousel::Carousel;
use facade::{Component, WidgetError};

const WIDTH: u16 = 40;

fn demo_tree(slides: usize) -> Element {
    let children = (0..slides).map(|i| {
        Element::col()
            .id(format!("slide-{i}"))
            .class("slide")
            .height(Size::Fill)
    });

    Element::col()
        .id("carousel")
        .width(Size::Fill)
        .height(Size::Fill)
        .overflow(Overflow::Hidden)
        .child(
            Element::row()
                .id("slides")
                .data("slides", "")
                .height(Size::Fill)
                .children(children),
        )
        .child(
            Element::row()
                .child(Element::text("‹ Prev").id("prev").data("carousel-prev", ""))
                .child(Element::text("Next ›").id("next").data("carousel-next", "")),
        )
}

fn ready(slides: usize) -> (Carousel, casement::LayoutResult, Instant) {
    let now = Instant::now();
    let mut carousel = Carousel::new(demo_tree(slides)).unwrap();
    let result = layout(carousel.root(), Rect::from_size(WIDTH, 20));
    carousel.after_layout(&result, now);
    let result = layout(carousel.root(), Rect::from_size(WIDTH, 20));
    (carousel, result, now)
}

#[test]
fn test_missing_markers_fail_construction() {
    let root = Element::col().id("carousel");
    assert!(matches!(
        Carousel::new(root),
        Err(WidgetError::MissingMarker("slides"))
    ));
}

#[test]
fn test_next_advances_and_slides() {
    let (mut carousel, _, now) = ready(4);
    assert_eq!(carousel.active_index(), 0);

    carousel.next(now);
    assert_eq!(carousel.active_index(), 1);

    carousel.tick(now + Duration::from_millis(600));
    assert_eq!(carousel.strip_offset(), -(WIDTH as f32));
}

#[test]
fn test_wrap_around() {
    let (mut carousel, _, now) = ready(3);

    carousel.prev(now);
    assert_eq!(carousel.active_index(), 2);

    carousel.next(now + Duration::from_secs(1));
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn test_active_class_follows_index() {
    let (mut carousel, _, now) = ready(3);
    assert!(find_element(carousel.root(), "slide-0")
        .unwrap()
        .has_class("is-active"));

    carousel.next(now);
    assert!(!find_element(carousel.root(), "slide-0")
        .unwrap()
        .has_class("is-active"));
    assert!(find_element(carousel.root(), "slide-1")
        .unwrap()
        .has_class("is-active"));
}

#[test]
fn test_click_affordances() {
    let (mut carousel, result, now) = ready(3);

    let next = result.get("next").unwrap();
    carousel.handle(
        &Event::Click {
            x: next.x,
            y: next.y,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    assert_eq!(carousel.active_index(), 1);

    let prev = result.get("prev").unwrap();
    carousel.handle(
        &Event::Click {
            x: prev.x,
            y: prev.y,
            button: MouseButton::Left,
        },
        &result,
        now,
    );
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn test_slides_sized_to_viewport() {
    let (carousel, result, _) = ready(3);
    assert_eq!(
        result.get("slide-0"),
        Some(Rect::new(0, 0, WIDTH, 19))
    );
    assert_eq!(carousel.slide_count(), 3);
}
