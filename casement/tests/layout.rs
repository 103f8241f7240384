use casement::element::{collect_paths_by_marker, element_at, find_path_by_marker};
use casement::{layout, Element, Overflow, Position, Rect, Size};

#[test]
fn test_column_stacks_fixed_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(Element::box_().id("a").height(Size::Fixed(3)).width(Size::Fill))
        .child(Element::box_().id("b").height(Size::Fixed(4)).width(Size::Fill));

    let result = layout(&root, Rect::from_size(20, 20));
    assert_eq!(result.get("a"), Some(Rect::new(0, 0, 10, 3)));
    assert_eq!(result.get("b"), Some(Rect::new(0, 3, 10, 4)));
}

#[test]
fn test_fill_splits_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(5))
        .child(Element::box_().id("fixed").width(Size::Fixed(8)).height(Size::Fill))
        .child(Element::box_().id("fill").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(20, 5));
    assert_eq!(result.get("fill"), Some(Rect::new(8, 0, 12, 5)));
}

#[test]
fn test_padding_insets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .padding(2)
        .child(Element::box_().id("a").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(10, 10));
    assert_eq!(result.get("a"), Some(Rect::new(2, 2, 6, 6)));
}

#[test]
fn test_scroll_records_content_and_viewport() {
    let items = (0..10).map(|i| {
        Element::text(format!("item {i}"))
            .id(format!("item-{i}"))
            .height(Size::Fixed(2))
            .width(Size::Fill)
    });
    let root = Element::col()
        .id("scroll")
        .width(Size::Fixed(10))
        .height(Size::Fixed(6))
        .overflow_y(Overflow::Scroll)
        .children(items);

    let result = layout(&root, Rect::from_size(10, 6));
    assert_eq!(result.content_size("scroll"), Some((10, 20)));
    assert_eq!(result.viewport_size("scroll"), Some((10, 6)));
}

#[test]
fn test_scroll_offset_shifts_children() {
    let items = (0..10).map(|i| {
        Element::box_()
            .id(format!("item-{i}"))
            .height(Size::Fixed(2))
            .width(Size::Fill)
    });
    let root = Element::col()
        .id("scroll")
        .width(Size::Fixed(10))
        .height(Size::Fixed(6))
        .overflow_y(Overflow::Scroll)
        .scroll_offset(0, 4)
        .children(items);

    let result = layout(&root, Rect::from_size(10, 6));
    // item-2 starts at natural y=4, shifted up by the offset to y=0.
    assert_eq!(result.get("item-2"), Some(Rect::new(0, 0, 10, 2)));
}

#[test]
fn test_translate_x_pct_shifts_by_own_width() {
    let mut strip = Element::row()
        .id("strip")
        .width(Size::Fixed(40))
        .height(Size::Fixed(4));
    strip.translate_x_pct = -50.0;
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(4))
        .child(strip);

    let result = layout(&root, Rect::from_size(40, 4));
    // Shifted left by 20 of 40 cells; the visible half remains.
    assert_eq!(result.get("strip"), Some(Rect::new(0, 0, 20, 4)));
}

#[test]
fn test_overlay_child_ignores_flow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(Element::box_().id("flow").width(Size::Fill).height(Size::Fixed(3)))
        .child(
            Element::box_()
                .id("over")
                .position(Position::Overlay)
                .width(Size::Fill)
                .height(Size::Fixed(5))
                .top(2),
        );

    let result = layout(&root, Rect::from_size(10, 10));
    // Overlay is anchored at the content origin plus its offset, and the
    // flow child keeps its position.
    assert_eq!(result.get("over"), Some(Rect::new(0, 2, 10, 5)));
    assert_eq!(result.get("flow"), Some(Rect::new(0, 0, 10, 3)));
}

#[test]
fn test_marker_queries() {
    let root = Element::col()
        .id("root")
        .child(
            Element::box_().id("wrap").child(
                Element::box_()
                    .id("content")
                    .data("scroll-content", ""),
            ),
        )
        .child(Element::box_().id("other").data("scroll-bar", ""));

    let path = find_path_by_marker(&root, "scroll-content").unwrap();
    assert_eq!(element_at(&root, &path).unwrap().id, "content");
    assert_eq!(collect_paths_by_marker(&root, "scroll-bar").len(), 1);
}
