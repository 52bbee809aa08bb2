// Copyright 2025 AnantaLink Technology Pvt. Ltd.
// Licensed under MIT OR Apache-2.0
//
// Server-side rendering tests for the landing page. These assert the
// initial render contract: dark theme applied, mobile menu absent, all
// anchor targets present, and static contact details in place.
//
// Run with: cargo test --no-default-features --features ssr

#![cfg(feature = "ssr")]

use anantalink_website::pages::Home::Home;
use leptos::*;

fn render_home() -> String {
    leptos::ssr::render_to_string(|| {
        leptos_meta::provide_meta_context();
        view! { <Home/> }
    })
    .to_string()
}

#[test]
fn initial_render_applies_dark_theme() {
    let html = render_home();
    assert!(
        html.contains("min-h-screen overflow-x-hidden bg-background text-foreground dark"),
        "page wrapper should carry the dark class on first render"
    );
}

#[test]
fn mobile_menu_is_absent_when_closed() {
    let html = render_home();
    // match the element id, not the hydration markers derived from the
    // component name
    assert!(
        !html.contains("id=\"mobile-menu\""),
        "closed menu must not appear in the render tree"
    );
}

#[test]
fn all_four_anchor_targets_exist() {
    let html = render_home();
    for anchor in ["platform", "solutions", "architecture", "contact"] {
        assert!(
            html.contains(&format!("id=\"{anchor}\"")),
            "missing anchor target {anchor}"
        );
    }
}

#[test]
fn desktop_nav_links_appear_in_order() {
    let html = render_home();
    let positions: Vec<usize> = ["#platform", "#solutions", "#architecture", "#contact"]
        .iter()
        .map(|href| {
            html.find(&format!("href=\"{href}\""))
                .unwrap_or_else(|| panic!("missing nav link {href}"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "nav links out of order: {positions:?}"
    );
}

#[test]
fn hero_heading_renders() {
    let html = render_home();
    assert!(html.contains("SmartCare IoMT Ecosystem"));
}

#[test]
fn contact_details_are_present() {
    let html = render_home();
    assert!(html.contains("contact@anantalink.com"));
    assert!(html.contains("+91-9815758978"));
    assert!(html.contains("Location: India"));
}

#[test]
fn footer_and_back_to_top_render() {
    let html = render_home();
    assert!(html.contains("AnantaLink Technology Pvt. Ltd."));
    assert!(html.contains("aria-label=\"Back to top\""));
}

#[test]
fn footer_copyright_shows_current_year() {
    use chrono::Datelike;

    let html = render_home();
    let expected = format!("© {} AnantaLink", chrono::Utc::now().year());
    assert!(
        html.contains(&expected),
        "footer should carry the current year: {expected}"
    );
}
