//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they inherit the surrounding
//! text color and need no extra asset requests.

use leptos::prelude::*;

/// Common icon edge length in pixels.
const ICON_SIZE: &str = "16";

/// "Generally available" mark: a filled seal with a check.
#[component]
pub fn GaIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            data-icon="ga"
            aria-hidden="true"
            width=ICON_SIZE
            height=ICON_SIZE
        >
            <path
                fill="#67dae1"
                d="M12 1.5l2.6 1.9 3.2-.1 1 3 2.6 1.9-1 3.1 1 3.1-2.6 1.9-1 3-3.2-.1L12 22.5l-2.6-1.9-3.2.1-1-3L2.6 15.9l1-3.1-1-3.1 2.6-1.9 1-3 3.2.1z"
            />
            <polyline
                points="7.5 12.5 10.5 15.5 16.5 9"
                stroke="#ffffff"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
