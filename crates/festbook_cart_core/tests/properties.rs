//! Property tests for the cart invariants.

use festbook_cart_core::{
    compute_total, CartLineItem, CartService, Decimal, Event, EventId, MemoryStore, SeatType,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn seat_type() -> impl Strategy<Value = SeatType> {
    prop_oneof![
        Just(SeatType::General),
        Just(SeatType::Vip),
        Just(SeatType::Premium),
    ]
}

/// Prices in paise so sums stay exact.
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

fn event(id: u8, price: Decimal) -> Event {
    Event {
        id: EventId::from(i64::from(id)),
        name: format!("Event {}", id),
        description: None,
        image: None,
        date: None,
        price,
        available_seats: 500,
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add { id: u8, price: Decimal, quantity: u32, seat: SeatType },
    Remove { id: u8, seat: SeatType },
    Update { id: u8, seat: SeatType, quantity: u32 },
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..5, price(), 0u32..20, seat_type())
            .prop_map(|(id, price, quantity, seat)| Op::Add { id, price, quantity, seat }),
        2 => (0u8..5, seat_type()).prop_map(|(id, seat)| Op::Remove { id, seat }),
        3 => (0u8..5, seat_type(), 0u32..20)
            .prop_map(|(id, seat, quantity)| Op::Update { id, seat, quantity }),
        1 => Just(Op::Clear),
    ]
}

fn apply(cart: &mut CartService<MemoryStore>, op: &Op) {
    match op {
        Op::Add { id, price, quantity, seat } => cart.add_item(&event(*id, *price), *quantity, *seat),
        Op::Remove { id, seat } => cart.remove_item(&EventId::from(i64::from(*id)), *seat),
        Op::Update { id, seat, quantity } => {
            cart.update_quantity(&EventId::from(i64::from(*id)), *seat, *quantity)
        }
        Op::Clear => cart.clear_cart(),
    }
}

proptest! {
    #[test]
    fn repeated_adds_sum_into_one_line(
        quantities in proptest::collection::vec(1u32..50, 1..20),
        seat in seat_type(),
        first_price in price(),
        later_price in price(),
    ) {
        let mut cart = CartService::open(MemoryStore::new());
        cart.add_item(&event(1, first_price), quantities[0], seat);
        for q in &quantities[1..] {
            cart.add_item(&event(1, later_price), *q, seat);
        }

        let expected: u32 = quantities.iter().sum();
        prop_assert_eq!(cart.items().len(), 1);
        prop_assert_eq!(cart.items()[0].quantity, expected);
        prop_assert_eq!(cart.items()[0].price, first_price);
    }

    #[test]
    fn total_ignores_item_order(
        lines in proptest::collection::vec((0u8..50, price(), 1u32..30, seat_type()), 0..15),
        seed in any::<u64>(),
    ) {
        let items: Vec<CartLineItem> = lines
            .iter()
            .map(|(id, price, quantity, seat)| CartLineItem::from_event(&event(*id, *price), *quantity, *seat))
            .collect();

        let mut reversed = items.clone();
        reversed.reverse();
        let mut rotated = items.clone();
        if !rotated.is_empty() {
            let k = (seed as usize) % rotated.len();
            rotated.rotate_left(k);
        }

        let total = compute_total(&items);
        prop_assert_eq!(total, compute_total(&reversed));
        prop_assert_eq!(total, compute_total(&rotated));
    }

    #[test]
    fn invariants_hold_for_any_operation_sequence(ops in proptest::collection::vec(op(), 0..60)) {
        let backend = MemoryStore::new();
        let mut cart = CartService::open(backend.clone());
        for op in &ops {
            apply(&mut cart, op);
        }

        let quantity_sum: u64 = cart.items().iter().map(|l| u64::from(l.quantity)).sum();
        prop_assert_eq!(cart.item_count(), quantity_sum);
        prop_assert_eq!(cart.total(), compute_total(cart.items()));
        prop_assert!(cart.items().iter().all(|l| l.quantity >= 1));

        let keys: HashSet<(EventId, SeatType)> = cart
            .items()
            .iter()
            .map(|l| (l.event_id.clone(), l.seat_type))
            .collect();
        prop_assert_eq!(keys.len(), cart.items().len());

        let reloaded = CartService::open(backend);
        prop_assert_eq!(reloaded.items(), cart.items());
    }
}
