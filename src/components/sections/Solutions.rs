use crate::components::Card::*;
use crate::icons::*;
use leptos::*;

#[component]
pub fn SolutionsSection() -> impl IntoView {
    view! {
        <section id="solutions" class="px-8 py-28 max-w-7xl mx-auto">
            <h2 class="text-3xl font-bold mb-4 text-primary">
                "Healthcare Solutions Portfolio"
            </h2>
            <p class="text-foreground-secondary mb-12 max-w-3xl">
                "Purpose-built IoMT modules exclusively for hospitals and healthcare systems.
                No cross-industry dilution. No generic IoT compromises."
            </p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                <Card>
                    <CardContent>
                        <div class="mb-4 text-primary">
                            <BuildingIcon/>
                        </div>
                        <h3 class="text-xl font-semibold mb-3">"Operational Efficiency"</h3>
                        <ul class="text-foreground-muted list-disc pl-5 space-y-1">
                            <li>"Asset & patient tracking"</li>
                            <li>"Queue & flow optimization"</li>
                            <li>"Wayfinding & entrance management"</li>
                            <li>"Contact tracing"</li>
                        </ul>
                    </CardContent>
                </Card>

                <Card>
                    <CardContent>
                        <div class="mb-4 text-primary">
                            <ActivityIcon/>
                        </div>
                        <h3 class="text-xl font-semibold mb-3">"Patient Safety & Care"</h3>
                        <ul class="text-foreground-muted list-disc pl-5 space-y-1">
                            <li>"Remote patient & vitals monitoring"</li>
                            <li>"Fall & bedsore intervention"</li>
                            <li>"Cold-chain & room condition monitoring"</li>
                            <li>"Automatic EMR data transfer"</li>
                        </ul>
                    </CardContent>
                </Card>

                <Card>
                    <CardContent>
                        <div class="mb-4 text-primary">
                            <ShieldCheckIcon/>
                        </div>
                        <h3 class="text-xl font-semibold mb-3">"Compliance & Clinical Ops"</h3>
                        <ul class="text-foreground-muted list-disc pl-5 space-y-1">
                            <li>"NABH/JCI readiness"</li>
                            <li>"AI-based resource scheduling"</li>
                            <li>"Audit-ready reporting"</li>
                            <li>"Post-operative & inpatient care workflows"</li>
                        </ul>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}
