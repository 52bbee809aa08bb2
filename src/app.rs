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

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - AnantaLink");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "AnantaLink",
        "url": "https://anantalink.com/",
        "email": "contact@anantalink.com",
        "telephone": "+91-9815758978",
        "description": "Modular, edge-first IoMT platform enabling hospitals to become smart, connected, and predictive.",
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "IN"
        }
    }
    "#;

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/anantalink_website.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="AnantaLink SmartCare IoMT ecosystem. A modular, edge-first IoMT platform enabling hospitals to become smart, connected, and predictive without heavy capital barriers."
        />
        <Meta
            name="keywords"
            content="iomt, internet of medical things, smart hospital, patient monitoring, asset tracking, hospital digital twin, healthcare iot"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="AnantaLink"/>
        <Meta property="og:url" content="https://anantalink.com/"/>
        <Meta property="og:title" content="AnantaLink - SmartCare IoMT Ecosystem"/>
        <Meta property="og:description" content="Modular, edge-first IoMT platform for smart, connected, and predictive hospitals."/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
