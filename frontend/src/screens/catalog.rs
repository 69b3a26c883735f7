use dioxus::prelude::*;
use festbook_cart_core::Event;
use crate::api;
use crate::config::AppConfig;
use crate::format::{format_event_date, format_inr};
use crate::theme::palette;
use crate::widgets::{Card, Page};

#[component]
pub fn CatalogScreen(is_dark: bool, on_open: EventHandler<Event>) -> Element {
    let config = use_context::<AppConfig>();
    let mut events = use_resource(move || {
        let url = config.events_url();
        async move { api::fetch_events(&url).await.map_err(|e| format!("{:#}", e)) }
    });
    let p = palette(is_dark);
    let state = (*events.read()).clone();

    rsx! {
        Page { is_dark,
            h1 { style: "margin-bottom: 8px;", "Upcoming events" }
            p { style: "color: {p.muted}; margin-bottom: 24px;", "Pick an event to book tickets." }
            {match state {
                None => rsx! {
                    p { style: "color: {p.muted};", "Loading events…" }
                },
                Some(Err(e)) => rsx! {
                    Card { is_dark,
                        p { style: "color: {p.error}; margin-bottom: 12px;", "Failed to fetch events." }
                        p { style: "color: {p.muted}; font-size: 0.85rem; margin-bottom: 12px;", "{e}" }
                        button {
                            onclick: move |_| events.restart(),
                            style: "padding: 8px 16px; border-radius: 8px; border: none; background: {p.accent}; color: {p.on_accent}; cursor: pointer;",
                            "Retry"
                        }
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Card { is_dark,
                        p { style: "color: {p.muted};", "No events scheduled yet." }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
                        for event in list {
                            EventCard { key: "{event.id}", is_dark, event: event.clone(), on_open }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn EventCard(is_dark: bool, event: Event, on_open: EventHandler<Event>) -> Element {
    let p = palette(is_dark);
    let date = event.date.as_deref().map(format_event_date).unwrap_or_default();
    let seats_label = if event.is_sold_out() {
        "Sold out".to_string()
    } else {
        format!("{} seats left", event.available_seats)
    };
    let opened = event.clone();

    rsx! {
        div {
            onclick: move |_| on_open.call(opened.clone()),
            style: "cursor: pointer; background: {p.surface}; border: 1px solid {p.border}; border-radius: 14px; overflow: hidden;",
            if let Some(src) = event.image.clone() {
                img { src: "{src}", alt: "{event.name}", style: "width: 100%; height: 140px; object-fit: cover;" }
            }
            div { style: "padding: 16px;",
                h3 { style: "margin: 0 0 6px;", "{event.name}" }
                p { style: "margin: 0 0 12px; color: {p.muted}; font-size: 0.85rem;", "{date}" }
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    span { style: "font-weight: 700; color: {p.accent};", "{format_inr(event.unit_price())}" }
                    span { style: "font-size: 0.8rem; color: {p.muted};", "{seats_label}" }
                }
            }
        }
    }
}
