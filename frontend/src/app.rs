use dioxus::prelude::*;
use festbook_cart_core::{CartSnapshot, Event};
use crate::config::AppConfig;
use crate::screens::{CartScreen, CatalogScreen, EventDetailsScreen};
use crate::storage;
use crate::toast::ToastQueue;
use crate::widgets::{Navbar, ToastHost};

#[derive(Clone, PartialEq)]
pub enum Route {
    Catalog,
    Details(Event),
    Cart,
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::from_env);
    // One cart per session, handed to every view through context.
    use_context_provider(|| {
        let mut cart = storage::open_cart(&config);
        cart.subscribe(|s: &CartSnapshot| {
            tracing::debug!(lines = s.items.len(), tickets = s.item_count, total = %s.total, "cart changed");
        });
        Signal::new(cart)
    });
    use_context_provider(|| Signal::new(ToastQueue::new()));

    let mut route = use_signal(|| Route::Catalog);
    let mut is_dark = use_signal(|| true);

    let current_screen = match route() {
        Route::Catalog => rsx! {
            CatalogScreen {
                is_dark: is_dark(),
                on_open: move |event: Event| route.set(Route::Details(event)),
            }
        },
        Route::Details(event) => rsx! {
            EventDetailsScreen {
                is_dark: is_dark(),
                event,
                on_back: move |_| route.set(Route::Catalog),
                on_view_cart: move |_| route.set(Route::Cart),
            }
        },
        Route::Cart => rsx! {
            CartScreen {
                is_dark: is_dark(),
                on_browse: move |_| route.set(Route::Catalog),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            Navbar {
                is_dark: is_dark(),
                route: route(),
                on_navigate: move |r: Route| route.set(r),
                on_toggle_theme: move |_| is_dark.toggle(),
            }
            ToastHost { is_dark: is_dark() }
            {current_screen}
        }
    }
}
