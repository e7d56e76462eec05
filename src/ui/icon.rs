//! Inline SVG icons.
//!
//! Rendered inline rather than fetched, so they pick up `currentColor` and
//! need no asset round-trip.

use leptos::prelude::*;

/// Predefined icon names
pub mod icons {
    pub const PLUS: &str = "plus";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const LOADER: &str = "loader";
    pub const WARNING: &str = "warning";
    pub const BRIEFCASE: &str = "briefcase";
}

/// Stroke path data for each icon name.
fn path_data(name: &str) -> &'static str {
    match name {
        icons::PLUS => "M12 4v16m8-8H4",
        icons::CHECK => "M5 13l4 4L19 7",
        icons::X => "M6 18L18 6M6 6l12 12",
        icons::EYE => {
            "M15 12a3 3 0 11-6 0 3 3 0 016 0z M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"
        }
        icons::EYE_CLOSED => {
            "M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.543-7a9.97 9.97 0 011.563-3.029m5.858.908a3 3 0 114.243 4.243M9.878 9.878l4.242 4.242M9.88 9.88l-3.29-3.29m7.532 7.532l3.29 3.29M3 3l3.59 3.59m0 0A9.953 9.953 0 0112 5c4.478 0 8.268 2.943 9.543 7a10.025 10.025 0 01-4.132 5.411m0 0L21 21"
        }
        icons::LOADER => {
            "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"
        }
        icons::WARNING => {
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
        }
        icons::BRIEFCASE => {
            "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
        }
        _ => "",
    }
}

#[component]
pub fn Icon(
    /// Icon name, one of the constants in [`icons`]
    name: &'static str,
    /// CSS classes for styling
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path_data(name) />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_path_data() {
        for name in [
            icons::PLUS,
            icons::CHECK,
            icons::X,
            icons::EYE,
            icons::EYE_CLOSED,
            icons::LOADER,
            icons::WARNING,
            icons::BRIEFCASE,
        ] {
            assert!(!path_data(name).is_empty(), "no path data for {name}");
        }
    }

    #[test]
    fn test_unknown_icon_renders_nothing() {
        assert_eq!(path_data("no-such-icon"), "");
    }
}
