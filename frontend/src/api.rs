//! HTTP client for the events backend.
use anyhow::{bail, Context};
use festbook_cart_core::Event;
use serde::Deserialize;

/// The backend answers either with a bare list or with a Spring-style page.
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsPayload {
    List(Vec<Event>),
    Page { content: Vec<Event> },
}

/// Decode a `/api/events` response body.
pub fn parse_events(body: &str) -> anyhow::Result<Vec<Event>> {
    let payload: EventsPayload =
        serde_json::from_str(body).context("unexpected events response")?;
    Ok(match payload {
        EventsPayload::List(events) => events,
        EventsPayload::Page { content } => content,
    })
}

/// GET /api/events
pub async fn fetch_events(url: &str) -> anyhow::Result<Vec<Event>> {
    let resp = reqwest::get(url)
        .await
        .with_context(|| format!("could not reach {}", url))?;
    let status = resp.status();
    let text = resp.text().await.context("could not read events response")?;
    if !status.is_success() {
        bail!("Failed to fetch events: {} - {}", status, text);
    }
    let events = parse_events(&text)?;
    tracing::debug!(count = events.len(), "events fetched");
    Ok(events)
}
