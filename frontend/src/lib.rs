//! FestBook frontend library: config, backend client, cart storage, formatting, UI.

pub mod api;
pub mod config;
pub mod format;
pub mod storage;
pub mod theme;
pub mod toast;

#[cfg(any(feature = "web", feature = "desktop"))]
pub mod app;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod screens;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod widgets;
