// Copyright 2025 AnantaLink Technology Pvt. Ltd.
// Licensed under MIT OR Apache-2.0
//
// In-browser tests for the landing page toggles. Each test mounts a
// fresh copy of the page, drives the controls through real DOM clicks,
// and checks the handful of landmarks that define the behavioral
// contract: theme class, menu presence, link order, and the
// smooth-scroll acquisition.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use anantalink_website::pages::Home::Home;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_home() -> web_sys::Element {
    let document = gloo_utils::document();
    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();
    leptos::mount_to(mount.clone().unchecked_into(), || {
        leptos_meta::provide_meta_context();
        view! { <Home/> }
    });
    mount
}

fn click(root: &web_sys::Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn page_class(root: &web_sys::Element) -> String {
    root.first_element_child()
        .expect("page wrapper")
        .get_attribute("class")
        .unwrap_or_default()
}

fn menu(root: &web_sys::Element) -> Option<web_sys::Element> {
    root.query_selector("#mobile-menu").unwrap()
}

fn document_root() -> HtmlElement {
    gloo_utils::document()
        .document_element()
        .unwrap()
        .unchecked_into()
}

fn scroll_behavior() -> String {
    document_root()
        .style()
        .get_property_value("scroll-behavior")
        .unwrap()
}

// Hosts the smooth-scroll acquisition in a child that can be torn down
// from within the test, so the release half of the contract is
// observable without unmounting the whole page.
#[component]
fn ScrollHarness() -> impl IntoView {
    let mounted = create_rw_signal(true);
    view! {
        <button id="teardown" on:click=move |_| mounted.set(false)>"tear down"</button>
        {move || mounted.get().then(|| view! { <ScrollUser/> })}
    }
}

#[component]
fn ScrollUser() -> impl IntoView {
    anantalink_website::scroll::use_smooth_scroll();
    view! { <span></span> }
}

fn mount_harness() -> web_sys::Element {
    let document = gloo_utils::document();
    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();
    leptos::mount_to(mount.clone().unchecked_into(), || view! { <ScrollHarness/> });
    mount
}

#[wasm_bindgen_test]
fn initial_render_is_dark_with_menu_closed() {
    let mount = mount_home();

    assert!(page_class(&mount).contains("dark"));
    assert!(menu(&mount).is_none());

    mount.remove();
}

#[wasm_bindgen_test]
fn mounting_enables_document_smooth_scroll() {
    let mount = mount_home();

    let root: HtmlElement = gloo_utils::document()
        .document_element()
        .unwrap()
        .unchecked_into();
    assert_eq!(
        root.style().get_property_value("scroll-behavior").unwrap(),
        "smooth"
    );

    mount.remove();
}

#[wasm_bindgen_test]
fn teardown_restores_prior_scroll_behavior() {
    let root = document_root();
    root.style()
        .set_property("scroll-behavior", "auto")
        .unwrap();

    let mount = mount_harness();
    assert_eq!(scroll_behavior(), "smooth");

    click(&mount, "#teardown");
    assert_eq!(
        scroll_behavior(),
        "auto",
        "teardown should restore the value that was set before mount"
    );

    let _ = root.style().remove_property("scroll-behavior");
    mount.remove();
}

#[wasm_bindgen_test]
fn teardown_removes_scroll_behavior_when_previously_unset() {
    let root = document_root();
    let _ = root.style().remove_property("scroll-behavior");

    let mount = mount_harness();
    assert_eq!(scroll_behavior(), "smooth");

    click(&mount, "#teardown");
    assert_eq!(
        scroll_behavior(),
        "",
        "teardown should leave the property unset, as it was before mount"
    );

    mount.remove();
}

#[wasm_bindgen_test]
fn theme_toggle_flips_once_per_click_and_restores_on_double_click() {
    let mount = mount_home();
    let toggle = "button[aria-label=\"Toggle color theme\"]";

    click(&mount, toggle);
    assert!(page_class(&mount).contains("light"));
    // the menu is unaffected by the theme toggle
    assert!(menu(&mount).is_none());

    click(&mount, toggle);
    assert!(page_class(&mount).contains("dark"));

    mount.remove();
}

#[wasm_bindgen_test]
fn hamburger_opens_menu_with_four_links_in_order() {
    let mount = mount_home();

    click(&mount, "button[aria-label=\"Toggle navigation menu\"]");
    let menu = menu(&mount).expect("menu should be present once opened");

    let links = menu.query_selector_all("a").unwrap();
    let labels: Vec<String> = (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.text_content())
        .collect();
    assert_eq!(labels, ["Platform", "Solutions", "Architecture", "Contact"]);

    mount.remove();
}

#[wasm_bindgen_test]
fn reclicking_hamburger_closes_menu() {
    let mount = mount_home();
    let hamburger = "button[aria-label=\"Toggle navigation menu\"]";

    click(&mount, hamburger);
    assert!(menu(&mount).is_some());
    click(&mount, hamburger);
    assert!(menu(&mount).is_none());

    mount.remove();
}

#[wasm_bindgen_test]
fn selecting_a_mobile_link_closes_menu_in_same_update() {
    let mount = mount_home();

    click(&mount, "button[aria-label=\"Toggle navigation menu\"]");
    assert!(menu(&mount).is_some());

    click(&mount, "#mobile-menu a");
    assert!(menu(&mount).is_none());

    mount.remove();
}

#[wasm_bindgen_test]
fn back_to_top_mutates_neither_flag() {
    let mount = mount_home();

    click(&mount, "button[aria-label=\"Back to top\"]");

    assert!(page_class(&mount).contains("dark"));
    assert!(menu(&mount).is_none());

    mount.remove();
}
