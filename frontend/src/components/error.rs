use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2" role="alert">
                <p class="text-sm font-semibold">
                    {move || error.get().map(|e| e.user_message()).unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}

/// Validation message rendered under a form field.
#[component]
pub fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="mt-1 text-sm text-status-error-text">{text}</p> })
    }
}
