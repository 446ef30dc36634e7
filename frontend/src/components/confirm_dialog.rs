use crate::components::common::ButtonVariant;
use leptos::ev::KeyboardEvent;
use leptos::*;

const DIALOG_BUTTON: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";

/// Label of the confirm button, swapped while the confirmed action runs.
fn confirm_text(label: &str, busy: bool) -> String {
    match (label.trim(), busy) {
        (_, true) => "Working...".to_string(),
        ("", false) => "Confirm".to_string(),
        (label, false) => label.to_string(),
    }
}

/// Yes/no prompt in front of a destructive action. The dialog only reports
/// the decision; callers act on it. Escape and the backdrop both cancel,
/// except while `busy`.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: String,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let confirm_label = store_value(confirm_label);
    let title = store_value(title);
    let message = store_value(message);
    let cancel = move || {
        if !busy.get_untracked() {
            on_cancel.call(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{title.get_value()}</h2>
                    <p class="text-sm text-fg-muted">{message.get_value()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=format!("{} {}", DIALOG_BUTTON, ButtonVariant::Secondary.classes())
                            disabled=move || busy.get()
                            on:click=move |_| cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=format!("{} {}", DIALOG_BUTTON, confirm_variant.classes())
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label.with_value(|label| confirm_text(label, busy.get()))}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
