//! Data models for events and cart line items.
//! Wire format matches the browser app: camelCase fields, prices as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of an event owned by the backend.
///
/// The backend hands out numeric ids while older cart snapshots may carry strings,
/// so both are accepted on read. Always written back as a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId(s)
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EventId(s),
            RawId::Signed(n) => EventId(n.to_string()),
            RawId::Unsigned(n) => EventId(n.to_string()),
        })
    }
}

/// Seat category a ticket is bought in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    #[default]
    General,
    Vip,
    Premium,
}

impl SeatType {
    pub const ALL: [SeatType; 3] = [SeatType::General, SeatType::Vip, SeatType::Premium];

    /// Wire value, as stored under `seatType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatType::General => "general",
            SeatType::Vip => "vip",
            SeatType::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeatType::General => "General",
            SeatType::Vip => "VIP",
            SeatType::Premium => "Premium",
        }
    }

    /// Case-insensitive parse of the wire value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Some(SeatType::General),
            "vip" => Some(SeatType::Vip),
            "premium" => Some(SeatType::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Event as listed by the backend. Only the fields the client renders are kept.
///
/// Accepts both the browser-facing names (`name`, `image`, `date`) and the backend
/// DTO names (`eventName`, `bannerImageUrl`, `eventDate`). When the payload has no
/// flat `price`/`availableSeats`, they are derived from `priceTiers`: the cheapest
/// tier's price and the sum of the tiers' free seats (or `maxCapacity`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "EventWire")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub available_seats: u32,
}

impl Event {
    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }

    /// Price charged per ticket; negative prices count as free.
    pub fn unit_price(&self) -> Decimal {
        self.price.max(Decimal::ZERO)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceTierWire {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    price: Option<Decimal>,
    #[serde(default)]
    available_seats: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventWire {
    id: EventId,
    #[serde(alias = "eventName")]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "bannerImageUrl")]
    image: Option<String>,
    #[serde(default, alias = "eventDate")]
    date: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    price: Option<Decimal>,
    #[serde(default)]
    available_seats: Option<u32>,
    #[serde(default)]
    max_capacity: Option<u32>,
    #[serde(default)]
    price_tiers: Vec<PriceTierWire>,
}

impl From<EventWire> for Event {
    fn from(wire: EventWire) -> Self {
        let price = wire
            .price
            .or_else(|| wire.price_tiers.iter().filter_map(|t| t.price).min())
            .unwrap_or_default();

        let tier_seats = wire
            .price_tiers
            .iter()
            .filter_map(|t| t.available_seats)
            .fold(None, |acc: Option<u32>, n| Some(acc.unwrap_or(0).saturating_add(n)));
        let available_seats = wire
            .available_seats
            .or(tier_seats)
            .or(wire.max_capacity)
            .unwrap_or(0);

        Event {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            image: wire.image,
            date: wire.date,
            price,
            available_seats,
        }
    }
}

/// One `(event, seat type)` entry in the cart.
///
/// Display fields and price are a snapshot taken when the entry was first added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub event_id: EventId,
    pub event_name: String,
    #[serde(default)]
    pub event_image: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub seat_type: SeatType,
}

impl CartLineItem {
    /// Snapshot `event` into a new line item. Negative prices are clamped to zero.
    pub fn from_event(event: &Event, quantity: u32, seat_type: SeatType) -> Self {
        CartLineItem {
            event_id: event.id.clone(),
            event_name: event.name.clone(),
            event_image: event.image.clone(),
            event_date: event.date.clone(),
            price: event.unit_price(),
            quantity,
            seat_type,
        }
    }

    /// Composite key match: `(event_id, seat_type)`.
    pub fn matches(&self, event_id: &EventId, seat_type: SeatType) -> bool {
        self.seat_type == seat_type && &self.event_id == event_id
    }

    /// `price * quantity`, saturating at `Decimal::MAX` instead of overflowing.
    pub fn line_total(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn event_id_accepts_numbers_and_strings() {
        let a: EventId = serde_json::from_str("42").unwrap();
        let b: EventId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"42\"");
    }

    #[test]
    fn seat_type_defaults_to_general_when_missing() {
        let item: CartLineItem = serde_json::from_str(
            r#"{"eventId":"E1","eventName":"Fest","price":100,"quantity":2}"#,
        )
        .unwrap();
        assert_eq!(item.seat_type, SeatType::General);
        assert_eq!(item.event_image, None);
        assert_eq!(item.line_total(), dec!(200));
    }

    #[test]
    fn seat_type_parse_is_case_insensitive() {
        assert_eq!(SeatType::parse("VIP"), Some(SeatType::Vip));
        assert_eq!(SeatType::parse(" premium "), Some(SeatType::Premium));
        assert_eq!(SeatType::parse("balcony"), None);
    }

    #[test]
    fn event_reads_backend_dto_names() {
        let event: Event = serde_json::from_str(
            r#"{"id":7,"eventName":"Battle of Bands","bannerImageUrl":"b.png","eventDate":"2025-03-01T18:00:00","price":250.5,"availableSeats":12}"#,
        )
        .unwrap();
        assert_eq!(event.id, EventId::from(7));
        assert_eq!(event.name, "Battle of Bands");
        assert_eq!(event.image.as_deref(), Some("b.png"));
        assert_eq!(event.price, dec!(250.5));
        assert_eq!(event.available_seats, 12);
    }

    #[test]
    fn event_derives_price_and_seats_from_tiers() {
        let event: Event = serde_json::from_str(
            r#"{"id":3,"eventName":"Tech Fest","maxCapacity":1000,"priceTiers":[
                {"tierName":"VIP","price":799.0,"availableSeats":50},
                {"tierName":"General","price":299.0,"availableSeats":400}
            ]}"#,
        )
        .unwrap();
        assert_eq!(event.price, dec!(299));
        assert_eq!(event.available_seats, 450);
        assert!(!event.is_sold_out());
    }

    #[test]
    fn event_falls_back_to_capacity_without_tier_seats() {
        let event: Event =
            serde_json::from_str(r#"{"id":4,"eventName":"Open Mic","maxCapacity":80,"priceTiers":[]}"#)
                .unwrap();
        assert_eq!(event.price, Decimal::ZERO);
        assert_eq!(event.available_seats, 80);
    }

    #[test]
    fn event_round_trips_through_its_own_serialization() {
        let event: Event = serde_json::from_str(
            r#"{"id":"E1","name":"Jam","price":120.5,"availableSeats":9}"#,
        )
        .unwrap();
        let back: Event = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn from_event_clamps_negative_price() {
        let event = Event {
            id: "E9".into(),
            name: "Refund Night".to_string(),
            description: None,
            image: None,
            date: None,
            price: dec!(-5),
            available_seats: 3,
        };
        assert_eq!(event.unit_price(), Decimal::ZERO);
        let item = CartLineItem::from_event(&event, 4, SeatType::Vip);
        assert_eq!(item.price, Decimal::ZERO);
        assert_eq!(item.line_total(), Decimal::ZERO);
        assert!(item.matches(&"E9".into(), SeatType::Vip));
        assert!(!item.matches(&"E9".into(), SeatType::General));
    }

    #[test]
    fn line_total_saturates_on_huge_amounts() {
        let item: CartLineItem = serde_json::from_str(
            r#"{"eventId":"E1","eventName":"x","price":1e20,"quantity":1000000000}"#,
        )
        .unwrap();
        assert_eq!(item.line_total(), Decimal::MAX);
    }
}
