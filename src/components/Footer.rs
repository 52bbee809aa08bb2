use crate::state::NavTarget;
use leptos::*;

/// Year shown in the copyright line, taken from the clock at render time.
pub fn current_year() -> i32 {
    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 px-6 relative overflow-hidden bg-background-secondary">
            // Top border with gradient
            <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/30 to-transparent"></div>

            <div class="max-w-7xl mx-auto relative z-10">
                <div class="flex flex-col md:flex-row justify-between items-center mb-12">
                    <div class="mb-8 md:mb-0">
                        <img
                            class="h-10 w-auto"
                            src="/images/anantalink-logo.svg"
                            alt="AnantaLink"
                        />
                    </div>

                    <nav class="w-full md:w-auto">
                        <ul class="grid grid-cols-2 sm:grid-cols-4 md:flex md:flex-row gap-x-10 gap-y-6 text-foreground-muted">
                            {NavTarget::ALL
                                .iter()
                                .map(|target| view! {
                                    <li>
                                        <a
                                            href=target.href()
                                            class="relative hover:text-foreground transition-colors group block"
                                        >
                                            <span>{target.label()}</span>
                                            <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-primary group-hover:w-full transition-all duration-300"></span>
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>

                <div class="pt-8 flex flex-col md:flex-row justify-between items-center relative">
                    // Subtle divider
                    <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/10 to-transparent"></div>

                    <p class="text-foreground-subtle text-sm mb-4 md:mb-0">
                        {format!("© {} AnantaLink Technology Pvt. Ltd.", current_year())}
                    </p>
                    <p class="text-foreground-subtle text-sm">
                        {"Modular. Predictive. Built for Indian healthcare reality."}
                    </p>
                </div>
            </div>
        </footer>
    }
}
