use super::view_model::{use_forgot_password_view_model, RESET_CONFIRMATION};
use crate::components::error::FieldError;
use crate::utils::navigation::LOGIN_PATH;
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let identifier = vm.identifier;
    let submitted = vm.submitted;
    let error = vm.error;
    let pending = vm.submit_action.pending();
    let submitter = vm.clone();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Forgot Your Password?"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Enter your email, phone, or employee ID below to receive a password reset link."
                    </p>
                </div>

                <Show
                    when=move || submitted.get()
                    fallback=move || {
                        let submitter = submitter.clone();
                        view! {
                            <form
                                class="space-y-4"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    submitter.submit();
                                }
                            >
                                <div>
                                    <label for="identifier" class="block text-sm font-medium text-fg">
                                        "Email, Phone, or Employee ID"
                                    </label>
                                    <input
                                        id="identifier"
                                        name="identifier"
                                        type="text"
                                        placeholder="m@example.com"
                                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text sm:text-sm"
                                        prop:value=identifier
                                        on:input=move |ev| identifier.set(event_target_value(&ev))
                                    />
                                    <FieldError message=error.into() />
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || pending.get()
                                    class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                                >
                                    {move || if pending.get() { "Sending..." } else { "Send Reset Link" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="rounded-md bg-status-success-bg p-4 text-sm text-status-success-text">
                        {RESET_CONFIRMATION}
                    </p>
                </Show>

                <div class="text-sm text-center">
                    <a href=LOGIN_PATH class="font-medium text-link hover:text-link-hover">
                        "Back to Login"
                    </a>
                </div>
            </div>
        </div>
    }
}
