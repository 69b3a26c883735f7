//! Colors and spacing shared by screens and widgets.

/// Resolved colors for the current light/dark mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub on_accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub border: &'static str,
}

pub const DARK: Palette = Palette {
    background: "#0F0A1E",
    surface: "rgba(255,255,255,0.06)",
    on_surface: "#F4F0FF",
    muted: "#A89FC2",
    accent: "#A855F7",
    on_accent: "#FFFFFF",
    success: "#22C55E",
    warning: "#F59E0B",
    error: "#F87171",
    border: "rgba(255,255,255,0.12)",
};

pub const LIGHT: Palette = Palette {
    background: "#F7F5FF",
    surface: "#FFFFFF",
    on_surface: "#1E1533",
    muted: "#6B6385",
    accent: "#7C3AED",
    on_accent: "#FFFFFF",
    success: "#15803D",
    warning: "#B45309",
    error: "#B91C1C",
    border: "#E4DEF5",
};

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        DARK
    } else {
        LIGHT
    }
}

pub mod spacing {
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_RADIUS: &str = "14px";
}
