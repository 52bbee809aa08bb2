/*
 * Copyright 2025 AnantaLink Technology Pvt. Ltd.
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Scoped smooth-scroll acquisition.
//!
//! Anchor navigation on this page relies on the document-wide
//! `scroll-behavior` style. That style outlives any one component, so it
//! is treated as a shared resource: [`use_smooth_scroll`] records the
//! prior inline value on mount and restores it in an `on_cleanup` when
//! the calling scope is disposed, whatever triggers the teardown.

#[cfg(not(feature = "ssr"))]
use leptos::on_cleanup;

/// Enable document-wide smooth scrolling for the lifetime of the calling
/// reactive scope. Call once from the page component.
pub fn use_smooth_scroll() {
    #[cfg(not(feature = "ssr"))]
    {
        let prior = swap_scroll_behavior(Some("smooth"));
        on_cleanup(move || {
            let _ = swap_scroll_behavior(prior.as_deref());
        });
    }
}

/// Smoothly scroll the viewport back to the page origin. Touches no page
/// state.
pub fn scroll_to_top() {
    #[cfg(not(feature = "ssr"))]
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Set the inline `scroll-behavior` of the document element to `value`
/// (`None` removes the property) and return the previous inline value,
/// `None` if it was unset.
#[cfg(not(feature = "ssr"))]
fn swap_scroll_behavior(value: Option<&str>) -> Option<String> {
    use wasm_bindgen::JsCast;

    let root = web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    let style = root.style();

    let prior = style
        .get_property_value("scroll-behavior")
        .ok()
        .filter(|v| !v.is_empty());

    match value {
        Some(value) => style.set_property("scroll-behavior", value).ok()?,
        None => {
            let _ = style.remove_property("scroll-behavior");
        }
    }
    prior
}
