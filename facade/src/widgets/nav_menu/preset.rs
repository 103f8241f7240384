//! Presentation preset for the navigation menu.

use casement::{Element, Overflow, Position, Size, Style};
use serde::Deserialize;

use super::NavMenu;
use crate::breakpoint::BreakpointWatcher;
use crate::component::Component;
use crate::error::WidgetError;
use crate::registry::PresetRegistration;
use crate::theme::Theme;

#[derive(Debug, Deserialize)]
struct NavData {
    items: Vec<NavItem>,
}

#[derive(Debug, Deserialize)]
struct NavItem {
    label: String,
    #[serde(default)]
    children: Vec<NavItem>,
}

const NAV_DATA: &str = r#"{
  "items": [
    { "label": "Home" },
    {
      "label": "Products",
      "children": [
        { "label": "All products" },
        {
          "label": "Categories",
          "children": [
            { "label": "Apparel" },
            { "label": "Footwear" },
            { "label": "Accessories" }
          ]
        },
        { "label": "New arrivals" }
      ]
    },
    {
      "label": "About",
      "children": [
        { "label": "Our story" },
        { "label": "Team" }
      ]
    },
    { "label": "Contact" }
  ]
}"#;

fn build_tier(items: &[NavItem], id: &str, root_tier: bool, theme: &Theme) -> Element {
    let mut tier = Element::col()
        .id(id.to_string())
        .class("tier")
        .width(Size::Fill)
        .style(Style::new().background(theme.surface.clone()));
    if root_tier {
        tier = tier.class("tier-one");
    } else {
        tier = tier.position(Position::Overlay).child(
            Element::text("‹ Back")
                .data("nav-back", "")
                .width(Size::Fill)
                .style(Style::new().foreground(theme.accent.clone()).bold()),
        );
    }

    for (index, item) in items.iter().enumerate() {
        if item.children.is_empty() {
            tier = tier.child(
                Element::text(item.label.clone())
                    .width(Size::Fill)
                    .style(Style::new().foreground(theme.text.clone())),
            );
        } else {
            let child_id = format!("{id}-{index}");
            tier = tier.child(
                Element::col()
                    .width(Size::Fill)
                    .child(
                        Element::text(format!("{} ›", item.label))
                            .data("tier-item", child_id.clone())
                            .width(Size::Fill)
                            .style(Style::new().foreground(theme.text.clone())),
                    )
                    .child(build_tier(&item.children, &child_id, false, theme)),
            );
        }
    }

    tier
}

fn demo_tree(data: &NavData) -> Element {
    let theme = Theme::default();

    Element::col()
        .id("site-nav")
        .width(Size::Fill)
        .height(Size::Fill)
        .overflow(Overflow::Hidden)
        .style(Style::new().background(theme.backdrop.clone()))
        .child(
            Element::text("☰ Menu")
                .id("menu-toggle")
                .data("menu-toggle", "")
                .width(Size::Fill)
                .style(Style::new().foreground(theme.accent.clone()).bold()),
        )
        .child(
            Element::col()
                .id("menu-panel")
                .data("menu-panel", "")
                .width(Size::Fill)
                .child(
                    Element::col()
                        .id("slide-target")
                        .data("slide-target", "")
                        .width(Size::Fill)
                        .overflow(Overflow::Hidden)
                        .child(build_tier(&data.items, "tier-root", true, &theme)),
                ),
        )
}

fn build_default() -> Result<Box<dyn Component>, WidgetError> {
    let data: NavData = serde_json::from_str(NAV_DATA)?;
    let root = demo_tree(&data);
    // Narrow terminals get the drill-down treatment.
    let watcher = BreakpointWatcher::new(100, 80);
    let menu = NavMenu::new(root, watcher)?;
    Ok(Box::new(menu))
}

inventory::submit! {
    PresetRegistration::new(
        "nav-menu/default",
        "Drill-down site navigation with tier transitions",
        build_default,
    )
}
