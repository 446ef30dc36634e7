use crate::mutation::NotificationKind;
use crate::state::toast::{use_toasts, Toast};
use leptos::*;

fn toast_classes(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        NotificationKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        NotificationKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let queue = use_toasts();
    let toasts = queue.toasts();
    let queue = store_value(queue);

    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex w-full max-w-sm flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let Toast { notification, .. } = toast;
                    view! {
                        <div
                            class=format!("rounded-md border px-4 py-3 shadow-lg {}", toast_classes(notification.kind))
                            role="status"
                        >
                            <div class="flex items-start justify-between gap-3">
                                <div>
                                    <p class="text-sm font-semibold">{notification.message}</p>
                                    {notification.description.map(|text| view! { <p class="text-xs mt-1">{text}</p> })}
                                </div>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="text-sm opacity-70 hover:opacity-100"
                                    on:click=move |_| queue.with_value(|queue| queue.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::mutation::Notification;
    use crate::state::toast::{ToastQueue, TOAST_LIFETIME};
    use crate::test_support::clock::ManualScheduler;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    #[test]
    fn renders_message_and_description() {
        let html = render_to_string(move || {
            let queue = ToastQueue::new(Rc::new(ManualScheduler::new()), TOAST_LIFETIME);
            queue.push(Notification::error("Component in use").with_description("Deletion failed"));
            provide_context(queue);
            view! { <ToastViewport /> }
        });
        assert!(html.contains("Component in use"));
        assert!(html.contains("Deletion failed"));
        assert!(html.contains("bg-status-error-bg"));
    }
}
