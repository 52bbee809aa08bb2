use crate::components::CTAButton::*;
use leptos::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="px-8 py-24 max-w-7xl mx-auto">
            <h2 class="text-3xl font-bold mb-6 text-primary">"Contact & Pilots"</h2>
            <p class="text-foreground-secondary max-w-3xl mb-10">
                "We work closely with hospitals, health systems, and government bodies
                to deploy pilot programs and validate real-world impact."
            </p>
            <div class="flex flex-col md:flex-row gap-6">
                <div class="text-sm text-foreground-secondary">
                    <p>"Email: contact@anantalink.com"</p>
                    <p>"Phone: +91-9815758978"</p>
                    <p>"Location: India"</p>
                </div>
                <CTAButton>"Request Pilot Deployment"</CTAButton>
                <CTAButton variant=ButtonVariant::Outline>"Contact Sales"</CTAButton>
            </div>
        </section>
    }
}
