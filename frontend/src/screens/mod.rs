mod cart;
mod catalog;
mod event_details;

pub use cart::CartScreen;
pub use catalog::CatalogScreen;
pub use event_details::EventDetailsScreen;
