use leptos::*;

/// Rounded panel used by every informational grid on the page.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="rounded-2xl bg-card border border-border/10">{children()}</div> }
}

#[component]
pub fn CardContent(
    #[prop(default = String::new(), into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=format!("p-6 {class}")>{children()}</div> }
}
