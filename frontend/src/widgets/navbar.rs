use dioxus::prelude::*;
use crate::app::Route;
use crate::storage::Cart;
use crate::theme::palette;

#[component]
pub fn Navbar(is_dark: bool, route: Route, on_navigate: EventHandler<Route>, on_toggle_theme: EventHandler<()>) -> Element {
    let cart = use_context::<Signal<Cart>>();
    let count = cart.read().item_count();
    let p = palette(is_dark);
    let on_events = matches!(route, Route::Catalog | Route::Details(_));
    let on_cart = matches!(route, Route::Cart);
    let events_bg = if on_events { p.accent } else { "transparent" };
    let cart_bg = if on_cart { p.accent } else { "transparent" };

    rsx! {
        div { style: "position: sticky; top: 0; z-index: 40; display: flex; align-items: center; gap: 12px; padding: 12px 24px; background: {p.background}; border-bottom: 1px solid {p.border};",
            span { style: "font-size: 1.25rem; font-weight: 700; color: {p.accent};", "FestBook" }
            div { style: "flex: 1;" }
            button {
                onclick: move |_| on_navigate.call(Route::Catalog),
                style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {events_bg}; color: {p.on_surface};",
                "Events"
            }
            button {
                onclick: move |_| on_navigate.call(Route::Cart),
                style: "position: relative; padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {cart_bg}; color: {p.on_surface};",
                "🛒 Cart"
                if count > 0 {
                    span { style: "position: absolute; top: -6px; right: -6px; min-width: 20px; height: 20px; padding: 0 4px; border-radius: 10px; background: #EF4444; color: white; font-size: 0.75rem; display: flex; align-items: center; justify-content: center; box-sizing: border-box;",
                        "{count}"
                    }
                }
            }
            button {
                onclick: move |_| on_toggle_theme.call(()),
                style: "padding: 8px 12px; border-radius: 8px; border: 1px solid {p.border}; background: transparent; color: {p.muted}; cursor: pointer;",
                if is_dark { "☀" } else { "☾" }
            }
        }
    }
}
