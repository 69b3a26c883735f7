//! FestBook frontend - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --no-default-features --features desktop.

#[cfg(any(feature = "web", feature = "desktop"))]
fn main() {
    init_logging();
    tracing::info!("starting FestBook frontend");
    dioxus::launch(festbook_frontend::app::App);
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() {
    eprintln!("Built without a UI platform. Enable the `web` or `desktop` feature.");
    std::process::exit(1);
}

#[cfg(all(any(feature = "web", feature = "desktop"), target_arch = "wasm32"))]
fn init_logging() {
    dioxus::logger::initialize_default();
}

#[cfg(all(any(feature = "web", feature = "desktop"), not(target_arch = "wasm32")))]
fn init_logging() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festbook_frontend=info,festbook_cart_core=info".into()),
        )
        .try_init();
}
