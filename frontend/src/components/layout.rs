use crate::{
    permissions::{LeaveManagementAccess, SalaryComponentAccess},
    router::{LEAVE_MANAGEMENT_PATH, SALARY_COMPONENTS_PATH},
    state::auth::{self, use_auth, use_permissions},
    utils::navigation,
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let permissions = use_permissions();
    let show_salary = move || permissions.with(|set| SalaryComponentAccess::evaluate(set.as_ref()).can_view_page);
    let show_leave = move || permissions.with(|set| LeaveManagementAccess::evaluate(set.as_ref()).can_view_page);
    let user_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.display_name().to_string())
                .unwrap_or_default()
        })
    };

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if let Some(result) = logout_action.value().get() {
            if let Err(err) = result {
                log::warn!("logout request failed: {}", err);
            }
            navigation::redirect_to(navigation::LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=navigation::HOME_PATH class="text-xl font-semibold text-fg">
                        "Payroll Console"
                    </a>
                    <nav class="flex items-center space-x-2">
                        <Show when=show_salary>
                            <a href=SALARY_COMPONENTS_PATH class=NAV_LINK_CLASS>
                                "Salary Components"
                            </a>
                        </Show>
                        <Show when=show_leave>
                            <a href=LEAVE_MANAGEMENT_PATH class=NAV_LINK_CLASS>
                                "Leave Management"
                            </a>
                        </Show>
                        <span class="text-sm text-fg-muted px-3">{user_name}</span>
                        <button
                            on:click=on_logout
                            class=format!("{} disabled:opacity-50", NAV_LINK_CLASS)
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">{children()}</div>
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}
