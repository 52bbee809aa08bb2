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

//! Page-level UI state: the color theme flag and the fixed set of
//! in-page navigation targets.
//!
//! Both flags live in reactive signals provided as context. They are
//! deliberately distinct context types (`RwSignal<Theme>` for the theme,
//! `RwSignal<bool>` for the mobile menu) so one handler can never reach
//! the other's state.

/// Color theme for the whole page. Not persisted; every page load starts
/// over in dark mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class applied to the page wrapper; all color-dependent styling
    /// keys off this via CSS custom properties.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Label shown on the toggle control: the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light",
            Theme::Light => "Dark",
        }
    }
}

/// The in-page sections reachable from the navigation bars. The page top
/// is not listed here; it is only reachable through the back-to-top
/// control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Platform,
    Solutions,
    Architecture,
    Contact,
}

impl NavTarget {
    /// Display order in both the desktop link row and the mobile menu.
    pub const ALL: [NavTarget; 4] = [
        NavTarget::Platform,
        NavTarget::Solutions,
        NavTarget::Architecture,
        NavTarget::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Platform => "Platform",
            NavTarget::Solutions => "Solutions",
            NavTarget::Architecture => "Architecture",
            NavTarget::Contact => "Contact",
        }
    }

    /// The `id` attribute of the section this target scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            NavTarget::Platform => "platform",
            NavTarget::Solutions => "solutions",
            NavTarget::Architecture => "architecture",
            NavTarget::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            NavTarget::Platform => "#platform",
            NavTarget::Solutions => "#solutions",
            NavTarget::Architecture => "#architecture",
            NavTarget::Contact => "#contact",
        }
    }
}
