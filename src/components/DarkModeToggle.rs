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

use crate::components::CTAButton::ButtonVariant;
use crate::state::Theme;
use leptos::*;

/// Flips the page theme. Purely client-side: the choice is not persisted
/// and every load starts in dark mode.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class=format!(
                "inline-flex items-center justify-center rounded-xl px-3 py-2 text-sm font-medium transition {}",
                ButtonVariant::Outline.classes(),
            )
            on:click=move |_| theme.update(|t| *t = t.toggled())
            aria-label="Toggle color theme"
        >
            {move || theme.get().toggle_label()}
        </button>
    }
}
