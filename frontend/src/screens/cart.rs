use dioxus::prelude::*;
use festbook_cart_core::CartLineItem;
use crate::format::{format_event_date, format_inr};
use crate::storage::Cart;
use crate::theme::palette;
use crate::toast::{ToastKind, ToastQueue};
use crate::widgets::{show_toast, Card, Page, QuantityStepper};

#[component]
pub fn CartScreen(is_dark: bool, on_browse: EventHandler<()>) -> Element {
    let mut cart = use_context::<Signal<Cart>>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let snapshot = cart.read().snapshot();
    let p = palette(is_dark);
    let ticket_word = if snapshot.item_count == 1 { "ticket" } else { "tickets" };

    rsx! {
        Page { is_dark,
            h1 { style: "margin-bottom: 24px;", "Your cart" }
            if snapshot.items.is_empty() {
                Card { is_dark,
                    p { style: "color: {p.muted}; margin-bottom: 12px;", "Your cart is empty." }
                    button {
                        onclick: move |_| on_browse.call(()),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; background: {p.accent}; color: {p.on_accent}; cursor: pointer;",
                        "Browse events"
                    }
                }
            } else {
                for line in snapshot.items.iter() {
                    CartRow {
                        key: "{line.event_id}-{line.seat_type.as_str()}",
                        is_dark,
                        line: line.clone(),
                    }
                }
                Card { is_dark,
                    div { style: "display: flex; justify-content: space-between; align-items: center;",
                        div {
                            p { style: "margin: 0; color: {p.muted};", "{snapshot.item_count} {ticket_word}" }
                            p { style: "margin: 4px 0 0; font-size: 1.5rem; font-weight: 700;", "Total: {format_inr(snapshot.total)}" }
                        }
                        button {
                            onclick: move |_| {
                                cart.write().clear_cart();
                                show_toast(toasts, ToastKind::Info, "Cart cleared");
                            },
                            style: "padding: 10px 20px; border-radius: 8px; border: 1px solid {p.error}; background: transparent; color: {p.error}; cursor: pointer;",
                            "Clear cart"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CartRow(is_dark: bool, line: CartLineItem) -> Element {
    let mut cart = use_context::<Signal<Cart>>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let p = palette(is_dark);
    let date = line.event_date.as_deref().map(format_event_date).unwrap_or_default();
    let seat = line.seat_type;
    let id_for_update = line.event_id.clone();
    let id_for_remove = line.event_id.clone();

    rsx! {
        Card { is_dark,
            div { style: "display: flex; gap: 16px; align-items: center;",
                if let Some(src) = line.event_image.clone() {
                    img { src: "{src}", alt: "{line.event_name}", style: "width: 72px; height: 72px; object-fit: cover; border-radius: 8px;" }
                }
                div { style: "flex: 1;",
                    p { style: "margin: 0; font-weight: 600;", "{line.event_name}" }
                    p { style: "margin: 4px 0 0; color: {p.muted}; font-size: 0.85rem;", "{seat.label()} · {date}" }
                    p { style: "margin: 4px 0 0; color: {p.muted}; font-size: 0.85rem;", "{format_inr(line.price)} each" }
                }
                QuantityStepper {
                    is_dark,
                    value: line.quantity,
                    min: 0,
                    max: u32::MAX,
                    on_change: move |q: u32| {
                        cart.write().update_quantity(&id_for_update, seat, q);
                        if q == 0 {
                            show_toast(toasts, ToastKind::Info, "Item removed from cart");
                        }
                    },
                }
                span { style: "min-width: 96px; text-align: right; font-weight: 700;", "{format_inr(line.line_total())}" }
                button {
                    onclick: move |_| {
                        cart.write().remove_item(&id_for_remove, seat);
                        show_toast(toasts, ToastKind::Info, "Item removed from cart");
                    },
                    style: "background: none; border: none; color: {p.error}; cursor: pointer; font-size: 1.1rem;",
                    title: "Remove",
                    "✕"
                }
            }
        }
    }
}
