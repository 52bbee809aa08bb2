use crate::errors::SiteError;
use leptos::*;

// A basic function to display errors served by the error boundaries.
// Feel free to do more complicated things here than just displaying them.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };

    // Get Errors from Signal
    // Downcast lets us take a type that implements `std::error::Error`
    let errors: Vec<SiteError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the
    // server; this may be customized by the specific application
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        let response = use_context::<ResponseOptions>();
        if let Some(response) = response {
            if let Some(error) = errors.first() {
                response.set_status(error.status_code());
            }
        }
    }

    view! {
        <h1>{if errors.len() > 1 { "Errors" } else { "Error" }}</h1>
        <For
            each=move || errors.clone().into_iter().enumerate()
            key=|(index, _error)| *index
            children=move |(_index, error)| {
                let error_string = error.to_string();
                let error_code = error.status_code();
                view! {
                    <h2>{error_code.to_string()}</h2>
                    <p>"Error: " {error_string}</p>
                }
            }
        />
    }
}
