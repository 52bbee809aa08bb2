use crate::components::Footer::*;
use crate::state::Theme;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class=move || {
            format!(
                "min-h-screen overflow-x-hidden bg-background text-foreground {}",
                theme.get().class(),
            )
        }>{children()} <Footer/></div>
    }
}
