use dioxus::prelude::*;
use crate::theme::{palette, spacing};

#[component]
pub fn Card(is_dark: bool, children: Element) -> Element {
    let p = palette(is_dark);
    rsx! {
        div {
            style: "background: {p.surface}; border: 1px solid {p.border}; border-radius: {spacing::CARD_RADIUS}; padding: {spacing::MD}; margin-bottom: {spacing::MD};",
            {children}
        }
    }
}
