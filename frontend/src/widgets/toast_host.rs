use chrono::Utc;
use dioxus::prelude::*;
use crate::theme::palette;
use crate::toast::{Toast, ToastKind, ToastQueue};

/// Push a toast and dismiss it once its lifetime is over.
pub fn show_toast(mut toasts: Signal<ToastQueue>, kind: ToastKind, message: &str) {
    let id = toasts.write().push(kind, message);
    let ms = kind.lifetime().num_milliseconds();
    spawn(async move {
        // Timer through the webview/browser so web and desktop behave the same.
        let timer = document::eval(&format!("await new Promise(r => setTimeout(r, {})); return true;", ms));
        if let Err(e) = timer.await {
            tracing::debug!(toast = id, error = ?e, "toast timer failed, dismissing early");
        }
        toasts.write().dismiss(id);
    });
}

/// Top-right stack of active toasts. Click a toast to dismiss it.
#[component]
pub fn ToastHost(is_dark: bool) -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let active = toasts.read().active_at(Utc::now());

    rsx! {
        div { style: "position: fixed; top: 72px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 50;",
            for toast in active {
                ToastView { key: "{toast.id}", is_dark, toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastView(is_dark: bool, toast: Toast) -> Element {
    let mut toasts = use_context::<Signal<ToastQueue>>();
    let p = palette(is_dark);
    let color = match toast.kind {
        ToastKind::Success => p.success,
        ToastKind::Info => p.accent,
        ToastKind::Warning => p.warning,
        ToastKind::Error => p.error,
    };
    let id = toast.id;

    rsx! {
        div {
            style: "min-width: 220px; padding: 12px 16px; border-radius: 10px; background: {p.background}; color: {p.on_surface}; border-left: 4px solid {color}; box-shadow: 0 6px 20px rgba(0,0,0,0.25); cursor: pointer;",
            onclick: move |_| toasts.write().dismiss(id),
            "{toast.message}"
        }
    }
}
