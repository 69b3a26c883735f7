//! Change notification: views subscribe and get the latest cart snapshot after every mutation.

use crate::models::CartLineItem;
use rust_decimal::Decimal;

/// Read-only view of the cart handed to subscribers and UI code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub total: Decimal,
    pub item_count: u64,
}

/// Anything that wants to hear about cart changes.
pub trait CartSubscriber {
    fn on_cart_changed(&mut self, snapshot: &CartSnapshot);
}

impl<F> CartSubscriber for F
where
    F: FnMut(&CartSnapshot),
{
    fn on_cart_changed(&mut self, snapshot: &CartSnapshot) {
        self(snapshot)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Ordered subscriber list. Delivery order is registration order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriberId, Box<dyn CartSubscriber>)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscriber: impl CartSubscriber + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not registered (or already removed).
    pub fn remove(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `snapshot` to every subscriber, synchronously.
    pub fn notify(&mut self, snapshot: &CartSnapshot) {
        for (_, subscriber) in self.entries.iter_mut() {
            subscriber.on_cart_changed(snapshot);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order_and_stops_after_remove() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::new();

        let first = {
            let log = log.clone();
            subs.add(move |s: &CartSnapshot| log.borrow_mut().push(("first", s.item_count)))
        };
        {
            let log = log.clone();
            subs.add(move |s: &CartSnapshot| log.borrow_mut().push(("second", s.item_count)));
        }

        subs.notify(&CartSnapshot { item_count: 1, ..Default::default() });
        assert!(subs.remove(first));
        assert!(!subs.remove(first));
        subs.notify(&CartSnapshot { item_count: 2, ..Default::default() });

        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("second", 2)]
        );
    }
}
