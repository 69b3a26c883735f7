use dioxus::prelude::*;
use crate::theme::{palette, spacing};

/// Full-height themed page with a centered content column.
#[component]
pub fn Page(is_dark: bool, children: Element) -> Element {
    let p = palette(is_dark);
    rsx! {
        div {
            style: "min-height: 100vh; background: {p.background}; color: {p.on_surface};",
            div { style: "max-width: 960px; margin: 0 auto; padding: {spacing::LG};",
                {children}
            }
        }
    }
}
