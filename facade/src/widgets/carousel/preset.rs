//! Presentation preset for the carousel.

use casement::{Element, Overflow, Size, Style};

use super::Carousel;
use crate::component::Component;
use crate::error::WidgetError;
use crate::registry::PresetRegistration;
use crate::theme::Theme;

const SLIDES: [&str; 4] = [
    "Slide one — welcome",
    "Slide two — features",
    "Slide three — pricing",
    "Slide four — get started",
];

fn demo_tree() -> Element {
    let theme = Theme::default();

    let slides = SLIDES.iter().enumerate().map(|(index, label)| {
        Element::col()
            .id(format!("slide-{index}"))
            .class("slide")
            .height(Size::Fill)
            .padding(2)
            .style(Style::new().background(if index % 2 == 0 {
                theme.surface.clone()
            } else {
                theme.track.clone()
            }))
            .child(
                Element::text(*label).style(Style::new().foreground(theme.text.clone()).bold()),
            )
    });

    Element::col()
        .id("carousel")
        .width(Size::Fill)
        .height(Size::Fill)
        .overflow(Overflow::Hidden)
        .style(Style::new().background(theme.backdrop.clone()))
        .child(
            Element::row()
                .id("slides")
                .data("slides", "")
                .height(Size::Fill)
                .children(slides),
        )
        .child(
            Element::row()
                .width(Size::Fill)
                .gap(4)
                .child(
                    Element::text("‹ Prev")
                        .id("prev")
                        .data("carousel-prev", "")
                        .style(Style::new().foreground(theme.accent.clone()).bold()),
                )
                .child(
                    Element::text("Next ›")
                        .id("next")
                        .data("carousel-next", "")
                        .style(Style::new().foreground(theme.accent.clone()).bold()),
                ),
        )
}

fn build_default() -> Result<Box<dyn Component>, WidgetError> {
    let carousel = Carousel::new(demo_tree())?;
    Ok(Box::new(carousel))
}

inventory::submit! {
    PresetRegistration::new(
        "carousel/default",
        "Sliding carousel stepped by next/prev",
        build_default,
    )
}
