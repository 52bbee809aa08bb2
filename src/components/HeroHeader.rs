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

use crate::components::CTAButton::*;
use crate::components::DarkModeToggle::*;
use crate::state::NavTarget;
use leptos::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <MobileMenuProvider>
            // Translucent sticky navigation
            <nav class="sticky top-0 z-50 backdrop-blur-md bg-background/90 border-b border-border/10">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        // Logo
                        <a href="/" class="flex-shrink-0 transition-opacity hover:opacity-80">
                            <img
                                class="h-10 w-auto"
                                src="/images/anantalink-logo.svg"
                                alt="AnantaLink Logo"
                            />
                        </a>

                        // Desktop Navigation
                        <div class="hidden md:flex items-center space-x-8">
                            {NavTarget::ALL
                                .iter()
                                .map(|target| view! { <NavLink target=*target/> })
                                .collect_view()}
                        </div>

                        // Right side controls
                        <div class="flex items-center space-x-4">
                            <DarkModeToggle/>
                            <MobileMenuButton/>
                        </div>
                    </div>
                </div>

                // Mobile Navigation Menu
                <MobileMenu/>
            </nav>

            // Hero Section
            <section id="platform" class="relative overflow-hidden bg-background">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="pt-24 pb-32 lg:pt-28 lg:pb-40 grid md:grid-cols-2 gap-16 items-center">
                        <div>
                            <h1 class="text-5xl md:text-6xl font-semibold mb-6 tracking-tight text-foreground">
                                "AnantaLink – SmartCare IoMT Ecosystem"
                            </h1>
                            <p class="text-xl text-foreground-secondary max-w-3xl mb-10">
                                "Innovating care with connected solutions. A modular, edge-first IoMT
                                platform enabling hospitals to become smart, connected, and predictive
                                without heavy capital barriers."
                            </p>
                            <CTAButton>"Request Pilot Deployment"</CTAButton>
                        </div>

                        <div class="rounded-2xl overflow-hidden shadow-lg">
                            <img
                                src="https://ehealth.eletsonline.com/wp-content/uploads/2019/07/1.jpg"
                                alt="Smart hospital IoMT ecosystem"
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </div>
            </section>
        </MobileMenuProvider>
    }
}

#[component]
fn NavLink(target: NavTarget) -> impl IntoView {
    view! {
        <a
            href=target.href()
            class="text-foreground-secondary hover:text-foreground transition-colors duration-200 text-sm font-medium"
        >
            {target.label()}
        </a>
    }
}

#[component]
fn MobileMenuProvider(children: Children) -> impl IntoView {
    provide_context(create_rw_signal(false));
    children()
}

#[component]
fn MobileMenuButton() -> impl IntoView {
    let (menu_open, set_menu_open) = expect_context::<RwSignal<bool>>().split();

    view! {
        <button
            class="md:hidden p-2 text-foreground-secondary hover:text-foreground transition-colors"
            on:click=move |_| set_menu_open.update(|n| *n = !*n)
            aria-label="Toggle navigation menu"
        >
            <svg
                class="h-6 w-6"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <path
                    class=move || if menu_open.get() { "hidden" } else { "" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 6h16M4 12h16M4 18h16"
                />
                <path
                    class=move || if menu_open.get() { "" } else { "hidden" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M6 18L18 6M6 6l12 12"
                />
            </svg>
        </button>
    }
}

// The link list is removed from the tree entirely while the menu is
// closed, so "closed" and "absent" can never drift apart.
#[component]
fn MobileMenu() -> impl IntoView {
    let menu_open = expect_context::<RwSignal<bool>>();

    view! {
        {move || {
            menu_open.get().then(|| view! {
                <div
                    id="mobile-menu"
                    class="md:hidden absolute top-full left-0 right-0 bg-background/95 backdrop-blur-md border-b border-border/10"
                >
                    <div class="px-4 py-6 space-y-4">
                        {NavTarget::ALL
                            .iter()
                            .map(|target| {
                                let target = *target;
                                view! {
                                    <MobileNavLink
                                        target=target
                                        on_click=move || menu_open.set(false)
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            })
        }}
    }
}

// Closing the menu happens in the same click that navigates, so the two
// are atomic from the user's point of view.
#[component]
fn MobileNavLink<F>(target: NavTarget, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <a
            href=target.href()
            class="block text-foreground-secondary hover:text-foreground transition-colors duration-200 text-base font-medium py-2"
            on:click=move |_| on_click()
        >
            {target.label()}
        </a>
    }
}
