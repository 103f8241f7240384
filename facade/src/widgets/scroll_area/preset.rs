//! Presentation presets for the scroll area.

use std::time::Duration;

use casement::{Element, Overflow, Size, Style};

use super::{ScrollArea, ScrollAreaOptions};
use crate::component::Component;
use crate::error::WidgetError;
use crate::registry::PresetRegistration;
use crate::theme::Theme;

fn demo_tree(lines: usize) -> Element {
    let theme = Theme::default();
    let items = (0..lines).map(|i| {
        Element::text(format!("{:>3}  The quick brown fox jumps over the lazy dog", i + 1))
            .width(Size::Fill)
            .style(Style::new().foreground(theme.text.clone()))
    });

    Element::row()
        .id("scroll-wrapper")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(theme.backdrop.clone()))
        .child(
            Element::col()
                .id("scroll-content")
                .data("scroll-content", "")
                .width(Size::Fill)
                .height(Size::Fill)
                .overflow_y(Overflow::Scroll)
                .child(
                    Element::col()
                        .id("content-inner")
                        .data("content-inner", "")
                        .width(Size::Fill)
                        .children(items),
                ),
        )
        .child(
            Element::col()
                .id("scroll-bar")
                .data("scroll-bar", "")
                .width(Size::Fixed(1))
                .height(Size::Fill)
                .style(Style::new().background(theme.track.clone()))
                .child(
                    Element::box_()
                        .id("scroll-knob")
                        .data("scroll-knob", "")
                        .width(Size::Fill)
                        .height(Size::Fixed(1))
                        .style(Style::new().background(theme.knob.clone())),
                ),
        )
}

fn build_default() -> Result<Box<dyn Component>, WidgetError> {
    let area = ScrollArea::new(
        demo_tree(120),
        ScrollAreaOptions {
            inside: false,
            ..Default::default()
        },
    )?;
    Ok(Box::new(area))
}

fn build_auto_hide() -> Result<Box<dyn Component>, WidgetError> {
    let area = ScrollArea::new(
        demo_tree(120),
        ScrollAreaOptions {
            hide_bar: true,
            hide_delay: Duration::from_millis(800),
            ..Default::default()
        },
    )?;
    Ok(Box::new(area))
}

inventory::submit! {
    PresetRegistration::new(
        "scroll-area/default",
        "Vertical scrollbar rendered beside the content",
        build_default,
    )
}

inventory::submit! {
    PresetRegistration::new(
        "scroll-area/auto-hide",
        "Overlay scrollbar that fades out after 800ms idle",
        build_auto_hide,
    )
}
