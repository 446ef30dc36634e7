use super::utils::{employee_label, period_label};
use super::view_model::{use_leave_management_view_model, LeaveRequestTable};
use crate::api::{LeaveDecision, LeaveRequest};
use crate::components::{
    access_denied::AccessDenied,
    common::ButtonVariant,
    data_table::DataTable,
    pagination::Pagination,
};
use crate::table::Column;
use leptos::*;

fn columns(on_manage: Callback<LeaveRequest>) -> Vec<Column<LeaveRequest>> {
    vec![
        Column::data("employee_name", "Employee", employee_label).sortable("employee_name"),
        Column::data("leave_type", "Leave Type", |r: &LeaveRequest| r.leave_type.clone())
            .sortable("leave_type"),
        Column::data("start_date", "Period", period_label).sortable("start_date"),
        Column::data("days", "Days", |r: &LeaveRequest| r.total_days().to_string()),
        Column::data("status", "Status", |r: &LeaveRequest| r.status.label().to_string())
            .sortable("status"),
        Column::display("actions", "Actions", move |r: &LeaveRequest| {
            let request = r.clone();
            let pending = request.is_pending();
            view! {
                <button
                    type="button"
                    class=format!(
                        "inline-flex items-center rounded-md px-3 py-1 text-xs font-semibold disabled:opacity-50 disabled:cursor-not-allowed {}",
                        ButtonVariant::Secondary.classes(),
                    )
                    disabled=!pending
                    on:click=move |_| on_manage.call(request.clone())
                >
                    "Manage"
                </button>
            }
            .into_view()
        }),
    ]
}

#[component]
fn LeaveRequestTableSection(
    table: LeaveRequestTable,
    on_manage: Callback<LeaveRequest>,
) -> impl IntoView {
    let snapshot = table.snapshot();
    let search_input = table.search_input();
    let table = store_value(table);

    view! {
        <div class="space-y-4">
            <input
                type="search"
                placeholder="Search by employee or leave type..."
                class="w-full max-w-sm rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                prop:value=search_input
                on:input=move |ev| table.with_value(|t| t.on_search_input(event_target_value(&ev)))
            />
            <DataTable
                columns=columns(on_manage)
                snapshot=snapshot
                on_sort=Callback::new(move |key: String| table.with_value(|t| t.set_sort(&key)))
                empty_title="No leave requests found"
            />
            <Pagination
                snapshot=snapshot
                on_previous=Callback::new(move |_| table.with_value(|t| t.previous_page()))
                on_next=Callback::new(move |_| table.with_value(|t| t.next_page()))
                on_page_size=Callback::new(move |size| table.with_value(|t| t.set_page_size(size)))
            />
        </div>
    }
}

/// Approve/reject prompt for the selected request.
#[component]
fn LeaveDecisionDialog(
    selected: RwSignal<Option<LeaveRequest>>,
    comment: RwSignal<String>,
    pending: Signal<bool>,
    on_decide: Callback<LeaveDecision>,
    on_close: Callback<()>,
) -> impl IntoView {
    let summary = move || {
        selected.with(|request| {
            request
                .as_ref()
                .map(|r| format!("{} · {} · {}", employee_label(r), r.leave_type, period_label(r)))
                .unwrap_or_default()
        })
    };
    let reason = move || selected.with(|request| request.as_ref().and_then(|r| r.reason.clone()));

    view! {
        <Show when=move || selected.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-xl"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg">"Update Leave Request"</h2>
                    <p class="text-sm text-fg-muted">{summary}</p>
                    {move || reason().map(|text| view! { <p class="text-sm text-fg">{text}</p> })}
                    <label class="block text-sm font-medium text-fg">
                        "Comment (optional)"
                        <textarea
                            rows="3"
                            class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                            prop:value=comment
                            on:input=move |ev| comment.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Ghost.classes())
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Danger.classes())
                            disabled=move || pending.get()
                            on:click=move |_| on_decide.call(LeaveDecision::Rejected)
                        >
                            "Reject"
                        </button>
                        <button
                            type="button"
                            class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                            disabled=move || pending.get()
                            on:click=move |_| on_decide.call(LeaveDecision::Approved)
                        >
                            "Approve"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn LeaveManagementPanel() -> impl IntoView {
    let vm = use_leave_management_view_model();
    let access = vm.access;
    let selected = vm.selected;
    let comment = vm.comment;
    let decide_action = vm.decide_action;
    let loading = Signal::derive({
        let snapshot = vm.table.snapshot();
        move || snapshot.with(|s| s.state.is_loading())
    });
    let vm = store_value(vm);

    let shell = move || {
        view! {
            <div class="space-y-6">
                <header class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold tracking-tight text-fg">"Leave Management"</h1>
                        <p class="text-sm text-fg-muted">"View and manage all employee leave requests."</p>
                    </div>
                    <button
                        type="button"
                        class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Secondary.classes())
                        disabled=move || loading.get()
                        on:click=move |_| vm.with_value(|vm| vm.refresh())
                    >
                        "Refresh"
                    </button>
                </header>
                <Show
                    when=move || access.get().can_view_data
                    fallback=|| view! { <AccessDenied title="You cannot view leave requests" /> }
                >
                    <LeaveRequestTableSection
                        table=vm.with_value(|vm| vm.table.clone())
                        on_manage=Callback::new(move |request| vm.with_value(|vm| vm.open(request)))
                    />
                </Show>
                <LeaveDecisionDialog
                    selected=selected
                    comment=comment
                    pending=decide_action.pending().into()
                    on_decide=Callback::new(move |decision| decide_action.dispatch(decision))
                    on_close=Callback::new(move |_| vm.with_value(|vm| vm.close()))
                />
            </div>
        }
    };

    view! {
        <Show when=move || access.get().can_view_page fallback=|| view! { <AccessDenied /> }>
            {shell}
        </Show>
    }
}
