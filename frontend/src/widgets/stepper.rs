use dioxus::prelude::*;
use crate::theme::palette;

/// `[-] n [+]`. Emits the requested new value; bounds are up to the caller,
/// except that the buttons disable themselves at `min` / `max`.
#[component]
pub fn QuantityStepper(is_dark: bool, value: u32, min: u32, max: u32, on_change: EventHandler<u32>) -> Element {
    let p = palette(is_dark);
    let button_style = format!(
        "width: 32px; height: 32px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; cursor: pointer;",
        p.border, p.on_surface
    );
    rsx! {
        div { style: "display: inline-flex; align-items: center; gap: 8px;",
            button {
                style: "{button_style}",
                disabled: value <= min,
                onclick: move |_| on_change.call(value.saturating_sub(1)),
                "−"
            }
            span { style: "min-width: 24px; text-align: center; font-weight: 600;", "{value}" }
            button {
                style: "{button_style}",
                disabled: value >= max,
                onclick: move |_| on_change.call(value.saturating_add(1)),
                "+"
            }
        }
    }
}
