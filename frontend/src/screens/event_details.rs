use dioxus::prelude::*;
use festbook_cart_core::{CartLineItem, Event, SeatType};
use crate::format::{format_event_date, format_inr};
use crate::storage::Cart;
use crate::theme::palette;
use crate::toast::{ToastKind, ToastQueue};
use crate::widgets::{show_toast, Card, Page, QuantityStepper};

/// Seats at or below this count get a "tickets left" warning.
const LOW_STOCK_THRESHOLD: u32 = 10;

#[component]
pub fn EventDetailsScreen(
    is_dark: bool,
    event: Event,
    on_back: EventHandler<()>,
    on_view_cart: EventHandler<()>,
) -> Element {
    let mut cart = use_context::<Signal<Cart>>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let mut quantity = use_signal(|| 1u32);
    let mut seat = use_signal(SeatType::default);

    let p = palette(is_dark);
    let max_quantity = event.available_seats.max(1);
    let sold_out = event.is_sold_out();
    let low_stock = !sold_out && event.available_seats <= LOW_STOCK_THRESHOLD;
    let in_cart = cart.read().is_in_cart(&event.id, seat());
    let preview = CartLineItem::from_event(&event, quantity(), seat()).line_total();
    let date = event.date.as_deref().map(format_event_date).unwrap_or_default();
    let description = event.description.clone().unwrap_or_default();
    let to_add = event.clone();

    rsx! {
        Page { is_dark,
            button {
                onclick: move |_| on_back.call(()),
                style: "margin-bottom: 16px; background: none; border: none; color: {p.accent}; cursor: pointer;",
                "← Back to events"
            }
            Card { is_dark,
                if let Some(src) = event.image.clone() {
                    img { src: "{src}", alt: "{event.name}", style: "width: 100%; max-height: 320px; object-fit: cover; border-radius: 10px; margin-bottom: 16px;" }
                }
                h1 { style: "margin: 0 0 8px;", "{event.name}" }
                p { style: "color: {p.muted}; margin: 0 0 16px;", "{date}" }
                if !description.is_empty() {
                    p { style: "line-height: 1.5; margin-bottom: 16px;", "{description}" }
                }
                p { style: "margin-bottom: 4px;", "Available seats: {event.available_seats}" }
                if low_stock {
                    p { style: "color: {p.warning}; font-weight: 600;", "🎫 Only {event.available_seats} tickets left!" }
                }
            }
            Card { is_dark,
                if sold_out {
                    p { style: "color: {p.error}; font-weight: 600;", "Sold out" }
                } else {
                    div { style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: center; margin-bottom: 16px;",
                        label { style: "display: flex; flex-direction: column; gap: 6px;",
                            span { style: "color: {p.muted}; font-size: 0.85rem;", "Seat type" }
                            select {
                                onchange: move |ev| seat.set(SeatType::parse(&ev.value()).unwrap_or_default()),
                                style: "padding: 8px; border-radius: 8px; border: 1px solid {p.border}; background: {p.background}; color: {p.on_surface};",
                                for st in SeatType::ALL {
                                    option { value: "{st.as_str()}", selected: st == seat(), "{st.label()}" }
                                }
                            }
                        }
                        div { style: "display: flex; flex-direction: column; gap: 6px;",
                            span { style: "color: {p.muted}; font-size: 0.85rem;", "Tickets" }
                            QuantityStepper {
                                is_dark,
                                value: quantity(),
                                min: 1,
                                max: max_quantity,
                                on_change: move |q: u32| quantity.set(q.clamp(1, max_quantity)),
                            }
                        }
                        div { style: "display: flex; flex-direction: column; gap: 6px;",
                            span { style: "color: {p.muted}; font-size: 0.85rem;", "Price" }
                            span { style: "font-size: 1.25rem; font-weight: 700; color: {p.accent};", "{format_inr(preview)}" }
                        }
                    }
                    div { style: "display: flex; gap: 12px; align-items: center;",
                        button {
                            onclick: move |_| {
                                let existed = cart.read().is_in_cart(&to_add.id, seat());
                                cart.write().add_item(&to_add, quantity(), seat());
                                if existed {
                                    show_toast(toasts, ToastKind::Info, "Cart updated!");
                                } else {
                                    show_toast(toasts, ToastKind::Success, "Added to cart!");
                                }
                            },
                            style: "padding: 12px 24px; border-radius: 8px; border: none; background: {p.accent}; color: {p.on_accent}; font-weight: 600; cursor: pointer;",
                            "Add to Cart"
                        }
                        if in_cart {
                            span { style: "color: {p.success}; font-weight: 600;", "✓ In cart" }
                            button {
                                onclick: move |_| on_view_cart.call(()),
                                style: "background: none; border: none; color: {p.accent}; cursor: pointer;",
                                "View cart →"
                            }
                        }
                    }
                }
            }
        }
    }
}
