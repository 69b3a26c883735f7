//! The cart: one owner of the line items, persisted and broadcast after every change.
//!
//! Every mutation runs the same pipeline: mutate `items`, then (if anything changed)
//! save the full list and notify subscribers with a fresh snapshot. The total is
//! never stored; it is recomputed from `items` whenever it is asked for.

use crate::models::{CartLineItem, Event, EventId, SeatType};
use crate::notify::{CartSnapshot, CartSubscriber, SubscriberId, Subscribers};
use crate::storage::{CartStore, KeyValueStore};
use crate::totals;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Cart over a durable key-value backend `S`.
#[derive(Debug)]
pub struct CartService<S: KeyValueStore> {
    items: Vec<CartLineItem>,
    store: CartStore<S>,
    subscribers: Subscribers,
}

impl<S: KeyValueStore> CartService<S> {
    /// Build the cart and hydrate it once from `store`.
    pub fn new(store: CartStore<S>) -> Self {
        let items = store.load();
        info!(lines = items.len(), key = store.key(), "cart hydrated");
        Self {
            items,
            store,
            subscribers: Subscribers::new(),
        }
    }

    /// Shorthand for `CartService::new(CartStore::new(backend))`.
    pub fn open(backend: S) -> Self {
        Self::new(CartStore::new(backend))
    }

    // --- Mutations ---

    /// Add `quantity` tickets of `event` in `seat_type`.
    ///
    /// An existing `(event, seat_type)` line only has its quantity increased; the
    /// price and display fields it was created with are kept. Adding zero tickets
    /// does nothing.
    pub fn add_item(&mut self, event: &Event, quantity: u32, seat_type: SeatType) {
        if quantity == 0 {
            return;
        }
        match self.position(&event.id, seat_type) {
            Some(i) => {
                let line = &mut self.items[i];
                line.quantity = line.quantity.saturating_add(quantity);
                debug!(event_id = %event.id, seat = seat_type.as_str(), quantity = line.quantity, "cart line incremented");
            }
            None => {
                self.items
                    .push(CartLineItem::from_event(event, quantity, seat_type));
                debug!(event_id = %event.id, seat = seat_type.as_str(), quantity, "cart line added");
            }
        }
        self.commit();
    }

    /// One general-admission ticket.
    pub fn add_one(&mut self, event: &Event) {
        self.add_item(event, 1, SeatType::default());
    }

    /// Remove the `(event_id, seat_type)` line. Missing lines are ignored.
    pub fn remove_item(&mut self, event_id: &EventId, seat_type: SeatType) {
        let Some(i) = self.position(event_id, seat_type) else {
            return;
        };
        self.items.remove(i);
        debug!(event_id = %event_id, seat = seat_type.as_str(), "cart line removed");
        self.commit();
    }

    /// Set the quantity of an existing line. Zero removes the line; missing lines
    /// are ignored.
    pub fn update_quantity(&mut self, event_id: &EventId, seat_type: SeatType, quantity: u32) {
        if quantity == 0 {
            self.remove_item(event_id, seat_type);
            return;
        }
        let Some(i) = self.position(event_id, seat_type) else {
            return;
        };
        if self.items[i].quantity == quantity {
            return;
        }
        self.items[i].quantity = quantity;
        debug!(event_id = %event_id, seat = seat_type.as_str(), quantity, "cart line quantity set");
        self.commit();
    }

    /// Empty the cart and drop the persisted snapshot.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.store.clear();
        debug!("cart cleared");
        self.broadcast();
    }

    // --- Queries ---

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, event_id: &EventId, seat_type: SeatType) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|item| item.matches(event_id, seat_type))
    }

    pub fn is_in_cart(&self, event_id: &EventId, seat_type: SeatType) -> bool {
        self.get(event_id, seat_type).is_some()
    }

    /// Total tickets across all lines.
    pub fn item_count(&self) -> u64 {
        totals::item_count(&self.items)
    }

    pub fn total(&self) -> Decimal {
        totals::compute_total(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }

    // --- Subscribers ---

    pub fn subscribe(&mut self, subscriber: impl CartSubscriber + 'static) -> SubscriberId {
        self.subscribers.add(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(id)
    }

    fn position(&self, event_id: &EventId, seat_type: SeatType) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.matches(event_id, seat_type))
    }

    /// Persist the full list, then notify.
    fn commit(&mut self) {
        self.store.save(&self.items);
        self.broadcast();
    }

    fn broadcast(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers.notify(&snapshot);
    }
}
