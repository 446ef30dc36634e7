use super::utils::DELETE_CONFIRMATION;
use super::view_model::{use_salary_components_view_model, SalaryComponentTable};
use crate::api::{RecordId, SalaryComponent};
use crate::components::{
    access_denied::AccessDenied,
    common::ButtonVariant,
    confirm_dialog::ConfirmDialog,
    data_table::DataTable,
    pagination::Pagination,
};
use crate::permissions::SalaryComponentAccess;
use crate::router::{salary_component_edit_path, SALARY_COMPONENT_NEW_PATH};
use crate::table::{yes_no, Column};
use leptos::*;

const ACTION_CLASS: &str = "inline-flex items-center rounded-md px-3 py-1 text-xs font-semibold";

/// Edit and Delete for one row. Follows `access` as it changes, so rows
/// already on screen pick up a late permissions load.
#[component]
fn RowActions(
    id: RecordId,
    access: Memo<SalaryComponentAccess>,
    on_delete: Callback<RecordId>,
) -> impl IntoView {
    let id = store_value(id);
    move || {
        let access = access.get();
        if !access.has_row_actions() {
            return "N/A".into_view();
        }
        let edit_href = id.with_value(salary_component_edit_path);
        view! {
            <div class="flex gap-2">
                {access.can_update.then(|| view! {
                    <a
                        href=edit_href
                        class=format!("{} {}", ACTION_CLASS, ButtonVariant::Secondary.classes())
                    >
                        "Edit"
                    </a>
                })}
                {access.can_delete.then(|| view! {
                    <button
                        type="button"
                        class=format!("{} {}", ACTION_CLASS, ButtonVariant::Danger.classes())
                        on:click=move |_| on_delete.call(id.get_value())
                    >
                        "Delete"
                    </button>
                })}
            </div>
        }
        .into_view()
    }
}

fn columns(
    access: Memo<SalaryComponentAccess>,
    on_delete: Callback<RecordId>,
) -> Vec<Column<SalaryComponent>> {
    vec![
        Column::data("id", "Component ID", |c: &SalaryComponent| c.id.to_string()).sortable("id"),
        Column::data("name", "Component Name", |c: &SalaryComponent| c.name.clone())
            .sortable("name"),
        Column::data("type", "Type", |c: &SalaryComponent| {
            c.component_type.as_str().to_string()
        })
        .sortable("type"),
        Column::data("is_days_based", "Days Based", |c: &SalaryComponent| {
            yes_no(c.is_days_based)
        })
        .sortable("is_days_based"),
        Column::data("is_base_component", "Base", |c: &SalaryComponent| {
            yes_no(c.is_base_component)
        })
        .sortable("is_base_component"),
        Column::display("actions", "Actions", move |c: &SalaryComponent| {
            view! { <RowActions id=c.id.clone() access=access on_delete=on_delete /> }.into_view()
        }),
    ]
}

#[component]
fn SalaryComponentTableSection(
    table: SalaryComponentTable,
    access: Memo<SalaryComponentAccess>,
    on_delete: Callback<RecordId>,
) -> impl IntoView {
    let snapshot = table.snapshot();
    let search_input = table.search_input();
    let table = store_value(table);

    view! {
        <div class="space-y-4">
            <input
                type="search"
                placeholder="Search components..."
                class="w-full max-w-sm rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                prop:value=search_input
                on:input=move |ev| table.with_value(|t| t.on_search_input(event_target_value(&ev)))
            />
            <DataTable
                columns=columns(access, on_delete)
                snapshot=snapshot
                on_sort=Callback::new(move |key: String| table.with_value(|t| t.set_sort(&key)))
                row_numbers=true
                empty_title="No salary components found"
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

#[component]
pub fn SalaryComponentsPanel() -> impl IntoView {
    let vm = use_salary_components_view_model();
    let access = vm.access;
    let pending_delete = vm.pending_delete;
    let deleting = vm.delete_action.pending();
    let table = store_value(vm.table.clone());
    let vm = store_value(vm);

    let shell = move || {
        view! {
            <div class="space-y-6">
                <header class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold tracking-tight text-fg">"Salary Components"</h1>
                        <p class="text-sm text-fg-muted">"Manage the master list of salary components."</p>
                    </div>
                    <Show when=move || access.get().can_create>
                        <a
                            href=SALARY_COMPONENT_NEW_PATH
                            class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Primary.classes())
                        >
                            "Add New Component"
                        </a>
                    </Show>
                </header>
                <Show
                    when=move || access.get().can_read
                    fallback=|| view! { <AccessDenied title="You cannot view salary component data" /> }
                >
                    <SalaryComponentTableSection
                        table=table.get_value()
                        access=access
                        on_delete=Callback::new(move |id| vm.with_value(|vm| vm.request_delete(id)))
                    />
                </Show>
                <ConfirmDialog
                    is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                    title="Delete Salary Component"
                    message=DELETE_CONFIRMATION
                    on_confirm=Callback::new(move |_| vm.with_value(|vm| vm.confirm_delete()))
                    on_cancel=Callback::new(move |_| vm.with_value(|vm| vm.cancel_delete()))
                    confirm_label="Delete"
                    busy=Signal::derive(move || deleting.get())
                    destructive=true
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee, hr_manager, page_only_user, payroll_admin, provide_auth};
    use crate::test_support::ssr::{render_to_string, with_runtime};

    fn render_for(user: crate::api::UserResponse) -> String {
        render_to_string(move || {
            provide_auth(Some(user));
            view! { <SalaryComponentsPanel /> }
        })
    }

    #[test]
    fn users_without_page_access_see_denial_only() {
        let html = render_for(employee());
        assert!(html.contains("You do not have sufficient permissions."));
        assert!(!html.contains("Salary Components"));
    }

    #[test]
    fn page_only_users_get_shell_with_data_denial() {
        let html = render_for(page_only_user());
        assert!(html.contains("Salary Components"));
        assert!(html.contains("You cannot view salary component data"));
        assert!(!html.contains("Add New Component"));
    }

    #[test]
    fn readers_see_sortable_table_without_create_button() {
        let html = render_for(hr_manager());
        assert!(html.contains("Component Name"));
        assert!(html.contains("Days Based"));
        assert!(html.contains("S.No."));
        assert!(html.contains("Search components..."));
        assert!(!html.contains("Add New Component"));
    }

    #[test]
    fn admins_get_create_button() {
        let html = render_for(payroll_admin());
        assert!(html.contains("Add New Component"));
        assert!(html.contains("/salary-components/new"));
    }

    #[test]
    fn row_actions_follow_late_permissions() {
        with_runtime(|| {
            let (granted, set_granted) = create_signal(SalaryComponentAccess::default());
            let access = create_memo(move |_| granted.get());
            let render = move || {
                view! {
                    <RowActions
                        id=RecordId::from(7)
                        access=access
                        on_delete=Callback::new(|_: RecordId| {})
                    />
                }
                .into_view()
                .render_to_string()
                .to_string()
            };

            let before = render();
            assert!(before.contains("N/A"));
            assert!(!before.contains("Delete"));

            set_granted.set(SalaryComponentAccess {
                can_view_page: true,
                can_read: true,
                can_update: true,
                can_delete: true,
                ..SalaryComponentAccess::default()
            });
            let after = render();
            assert!(after.contains("Edit"));
            assert!(after.contains("Delete"));
            assert!(after.contains("/salary-components/7/edit"));
        });
    }
}
