use crate::components::Card::*;
use crate::icons::*;
use leptos::*;

#[component]
pub fn ArchitectureSection() -> impl IntoView {
    view! {
        <section id="architecture" class="px-8 py-24 bg-background-secondary">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl font-bold mb-10 text-primary">
                    "Modular Architecture"
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <Card>
                        <CardContent>
                            <div class="mb-4 text-primary">
                                <LayersIcon/>
                            </div>
                            <h3 class="text-xl font-semibold mb-2">"Tracking Layer"</h3>
                            <p class="text-foreground-muted">
                                "People, assets, devices, and environment data captured via
                                plug-and-play IoMT hardware."
                            </p>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardContent>
                            <div class="mb-4 text-primary">
                                <CpuIcon/>
                            </div>
                            <h3 class="text-xl font-semibold mb-2">"Edge & Communication"</h3>
                            <p class="text-foreground-muted">
                                "BLE gateways and routers ensure low-latency, resilient data
                                collection even in constrained environments."
                            </p>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardContent>
                            <div class="mb-4 text-primary">
                                <ShieldCheckIcon/>
                            </div>
                            <h3 class="text-xl font-semibold mb-2">"Platform & Digital Twin"</h3>
                            <p class="text-foreground-muted">
                                "Unified IoMT platform with dashboards, APIs, and AI-ready digital
                                twin foundation."
                            </p>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}
