use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use crate::router::FORGOT_PASSWORD_PATH;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:z-10 sm:text-sm";

#[component]
pub fn LoginForm(
    username: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to Payroll Console"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "HR and payroll administration"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="username" class="sr-only">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                autocomplete="username"
                                class=format!("{} rounded-t-md", INPUT_CLASS)
                                placeholder="Username"
                                prop:value=username
                                on:input=move |ev| on_username_input.call(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class=format!("{} rounded-b-md", INPUT_CLASS)
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div class="flex items-center justify-end text-sm">
                        <a href=FORGOT_PASSWORD_PATH class="font-medium text-link hover:text-link-hover">
                            "Forgot your password?"
                        </a>
                    </div>

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
