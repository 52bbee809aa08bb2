use crate::scroll::scroll_to_top;
use leptos::*;

/// Floating control that scrolls back to the page origin. Triggers a
/// scroll action only; neither the theme nor the menu state is touched.
#[component]
pub fn BackToTop() -> impl IntoView {
    view! {
        <button
            class="fixed bottom-6 right-6 z-50 rounded-full bg-primary hover:bg-primary-dark text-background px-4 py-3 shadow-lg transition"
            on:click=move |_| scroll_to_top()
            aria-label="Back to top"
        >
            "↑"
        </button>
    }
}
