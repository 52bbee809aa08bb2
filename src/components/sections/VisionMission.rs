use crate::components::Card::*;
use crate::icons::*;
use leptos::*;

#[component]
pub fn VisionMissionSection() -> impl IntoView {
    view! {
        <section class="px-8 py-20 bg-background-secondary">
            <div class="mb-12 max-w-7xl mx-auto rounded-2xl overflow-hidden shadow">
                <img
                    src="https://cdnintech.com/media/chapter/1186641/1750941997-382952735/media/F3.png"
                    alt="AnantaLink modular IoMT architecture"
                    class="w-full object-contain bg-white"
                />
            </div>

            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                <Card>
                    <CardContent>
                        <div class="mb-4 text-primary">
                            <TrendingUpIcon/>
                        </div>
                        <h3 class="text-xl font-semibold mb-2">"Vision"</h3>
                        <p class="text-foreground-muted">
                            "To make every hospital smart, connected, and predictive without
                            imposing high CAPEX or rigid OEM lock-in."
                        </p>
                    </CardContent>
                </Card>

                <Card>
                    <CardContent>
                        <div class="mb-4 text-primary">
                            <ActivityIcon/>
                        </div>
                        <h3 class="text-xl font-semibold mb-2">"Mission"</h3>
                        <p class="text-foreground-muted">
                            "Enable real-time monitoring, action, and optimization through
                            modular IoMT devices and intelligent data integration."
                        </p>
                    </CardContent>
                </Card>

                <Card>
                    <CardContent>
                        <div class="mb-4 text-primary">
                            <MapIcon/>
                        </div>
                        <h3 class="text-xl font-semibold mb-2">"Long-Term Goal"</h3>
                        <p class="text-foreground-muted">
                            "Build India's first AI-driven hospital digital twin network
                            connecting patients, assets, staff, and environments."
                        </p>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}
