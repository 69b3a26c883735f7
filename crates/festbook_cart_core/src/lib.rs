//! FestBook cart core: line items, totals, persistence and change notification.
//!
//! The frontend owns one [`CartService`] per session and hands it to views; nothing
//! here is global.

mod error;
mod models;
mod notify;
mod service;
mod storage;
mod totals;

pub use error::{StorageError, StorageResult};
pub use models::{CartLineItem, Event, EventId, SeatType};
pub use notify::{CartSnapshot, CartSubscriber, SubscriberId, Subscribers};
pub use service::CartService;
pub use storage::{CartStore, FileStore, KeyValueStore, MemoryStore, CART_STORAGE_KEY};
pub use totals::{compute_total, item_count, normalize};

pub use rust_decimal::Decimal;
