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

use std::str::FromStr;

use leptos::*;
use thiserror::Error;

/// Closed set of call-to-action styles. Anything outside this set is a
/// configuration mistake and is rejected at parse time instead of
/// falling through to undefined styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Solid,
    Outline,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown button variant `{0}`, expected `solid` or `outline`")]
pub struct UnknownVariantError(String);

impl ButtonVariant {
    /// Fixed class record per variant.
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "bg-primary hover:bg-primary-dark text-background",
            ButtonVariant::Outline => "border border-border text-foreground-secondary hover:bg-foreground/10",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(ButtonVariant::Solid),
            "outline" => Ok(ButtonVariant::Outline),
            other => Err(UnknownVariantError(other.to_owned())),
        }
    }
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Solid)] variant: ButtonVariant,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = None)] href: Option<String>,
) -> impl IntoView {
    let base_classes =
        "inline-flex items-center justify-center rounded-xl px-6 py-3 font-medium transition";
    let combined_class = format!("{} {} {}", base_classes, variant.classes(), class);

    let content = children();

    view! {
        {move || match &href {
            Some(href) => view! {
                <a href=href class=&combined_class>
                    {content.clone()}
                </a>
            }.into_view(),
            None => view! {
                <button class=&combined_class>
                    {content.clone()}
                </button>
            }.into_view()
        }}
    }
}
