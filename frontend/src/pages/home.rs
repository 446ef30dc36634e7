use crate::components::layout::LoadingSpinner;
use crate::permissions::{LeaveManagementAccess, SalaryComponentAccess};
use crate::router::{LEAVE_MANAGEMENT_PATH, LOGIN_PATH, SALARY_COMPONENTS_PATH};
use crate::state::auth::{use_auth, use_permissions};
use leptos::*;

const TILE_CLASS: &str = "block rounded-lg border border-border bg-surface-elevated p-6 text-left shadow-sm hover:border-action-primary-border";

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let permissions = use_permissions();
    let salary = move || permissions.with(|set| SalaryComponentAccess::evaluate(set.as_ref()));
    let leave = move || permissions.with(|set| LeaveManagementAccess::evaluate(set.as_ref()));
    let signed_in = move || auth.with(|state| state.is_authenticated);
    let loading = move || auth.with(|state| state.loading);

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-4xl mx-auto py-12 px-4 sm:px-6 lg:px-8 space-y-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"Payroll Console"</h1>
                    <p class="mt-3 text-base text-fg-muted sm:text-lg">
                        "Leave approvals and salary structure administration"
                    </p>
                </div>
                <Show when=move || !loading() fallback=|| view! { <LoadingSpinner /> }>
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <div class="flex justify-center">
                                <a
                                    href=LOGIN_PATH
                                    class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                                >
                                    "Sign in"
                                </a>
                            </div>
                        }
                    >
                        <div class="grid gap-4 sm:grid-cols-2">
                            <Show when=move || salary().can_view_page>
                                <a href=SALARY_COMPONENTS_PATH class=TILE_CLASS>
                                    <h2 class="text-lg font-semibold text-fg">"Salary Components"</h2>
                                    <p class="text-sm text-fg-muted">"Earnings and deductions used to build salaries."</p>
                                </a>
                            </Show>
                            <Show when=move || leave().can_view_page>
                                <a href=LEAVE_MANAGEMENT_PATH class=TILE_CLASS>
                                    <h2 class="text-lg font-semibold text-fg">"Leave Management"</h2>
                                    <p class="text-sm text-fg-muted">"Review and decide on employee leave requests."</p>
                                </a>
                            </Show>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
