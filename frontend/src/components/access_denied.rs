use crate::utils::navigation;
use leptos::*;

pub const ACCESS_DENIED_MESSAGE: &str =
    "You do not have sufficient permissions. Please contact your administrator.";

/// Shown instead of a page, or of its data, when the user lacks the
/// capability for it.
#[component]
pub fn AccessDenied(#[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Access denied".to_string());
    view! {
        <div class="max-w-lg mx-auto my-12 rounded-lg border border-status-error-border bg-status-error-bg p-6 text-center space-y-4" role="alert">
            <h2 class="text-lg font-semibold text-status-error-text">{title}</h2>
            <p class="text-sm text-status-error-text">{ACCESS_DENIED_MESSAGE}</p>
            <div class="flex justify-center gap-3">
                <a
                    href=navigation::HOME_PATH
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                >
                    "Return home"
                </a>
                <button
                    type="button"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold border border-border text-fg hover:bg-surface-muted"
                    on:click=move |_| navigation::reload()
                >
                    "Refresh"
                </button>
            </div>
        </div>
    }
}
