mod card;
mod navbar;
mod page;
mod stepper;
mod toast_host;

pub use card::Card;
pub use navbar::Navbar;
pub use page::Page;
pub use stepper::QuantityStepper;
pub use toast_host::{show_toast, ToastHost};
