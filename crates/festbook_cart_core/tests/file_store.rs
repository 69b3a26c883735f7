//! FileStore: desktop persistence of the cart snapshot in a directory.

use festbook_cart_core::{
    CartService, CartStore, Decimal, Event, EventId, FileStore, KeyValueStore, SeatType,
};
use rust_decimal_macros::dec;

fn event(id: &str, price: Decimal) -> Event {
    Event {
        id: EventId::from(id),
        name: "Robotics Expo".to_string(),
        description: Some("Bots, drones and more".to_string()),
        image: None,
        date: Some("2025-04-02".to_string()),
        price,
        available_seats: 8,
    }
}

#[test]
fn open_creates_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("festbook");

    let store = FileStore::open(&dir).unwrap();

    assert!(dir.is_dir());
    assert_eq!(store.dir(), dir.as_path());
}

#[test]
fn get_set_remove_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(tmp.path()).unwrap();

    assert_eq!(store.get("cart").unwrap(), None);
    store.set("cart", "[]").unwrap();
    assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    assert!(tmp.path().join("cart.json").is_file());

    store.remove("cart").unwrap();
    store.remove("cart").unwrap();
    assert_eq!(store.get("cart").unwrap(), None);
}

#[test]
fn cart_persists_across_restarts() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let mut cart = CartService::open(FileStore::open(tmp.path()).unwrap());
        cart.add_item(&event("R1", dec!(120)), 2, SeatType::Vip);
        cart.add_one(&event("R2", dec!(60)));
    }

    let cart = CartService::open(FileStore::open(tmp.path()).unwrap());
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), dec!(300));
    assert!(cart.is_in_cart(&"R1".into(), SeatType::Vip));
}

#[test]
fn custom_key_keeps_snapshots_apart() {
    let tmp = tempfile::tempdir().unwrap();
    let mut guest = CartService::new(CartStore::with_key(FileStore::open(tmp.path()).unwrap(), "cart-guest"));
    guest.add_one(&event("R1", dec!(10)));

    let default_cart = CartService::open(FileStore::open(tmp.path()).unwrap());
    assert!(default_cart.is_empty());
    assert!(tmp.path().join("cart-guest.json").is_file());
}
