use super::form_view_model::use_salary_component_form_view_model;
use super::utils::FormMode;
use crate::api::ComponentType;
use crate::components::{
    access_denied::AccessDenied,
    common::{Button, ButtonVariant},
    error::FieldError,
    layout::LoadingSpinner,
};
use crate::router::SALARY_COMPONENTS_PATH;
use leptos::*;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text";

#[component]
pub fn SalaryComponentFormPanel(mode: FormMode) -> impl IntoView {
    let vm = use_salary_component_form_view_model(mode);
    let form = vm.form;
    let loading = vm.loading;
    let name_error = vm.name_error;
    let pending = vm.submit_action.pending();
    let title = vm.mode.title();
    let description = vm.mode.description();
    let submit_label = vm.mode.submit_label();
    let vm = store_value(vm);
    let allowed = move || vm.with_value(|vm| vm.can_submit());

    let fields = move || {
        view! {
            <form
                class="space-y-4 rounded-lg border border-border bg-surface-elevated p-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.with_value(|vm| vm.submit());
                }
            >
                <div>
                    <h1 class="text-xl font-semibold text-fg">{title}</h1>
                    <p class="text-sm text-fg-muted">{description}</p>
                </div>
                <div>
                    <label for="name" class="block text-sm font-medium text-fg">"Component Name"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="e.g., House Rent Allowance"
                        class=FIELD_CLASS
                        prop:value=form.name
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                    />
                    <FieldError message=name_error.into() />
                </div>
                <div>
                    <label for="type" class="block text-sm font-medium text-fg">"Component Type"</label>
                    <select
                        id="type"
                        class=FIELD_CLASS
                        on:change=move |ev| {
                            if let Some(kind) = ComponentType::parse(&event_target_value(&ev)) {
                                form.component_type.set(kind);
                            }
                        }
                    >
                        {ComponentType::ALL
                            .into_iter()
                            .map(|kind| view! {
                                <option
                                    value=kind.as_str()
                                    selected=move || form.component_type.get() == kind
                                >
                                    {kind.as_str()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label for="is_days_based" class="block text-sm font-medium text-fg">
                        "Is this component pro-rated based on attendance days?"
                    </label>
                    <select
                        id="is_days_based"
                        class=FIELD_CLASS
                        on:change=move |ev| form.is_days_based.set(event_target_value(&ev) == "true")
                    >
                        <option value="true" selected=move || form.is_days_based.get()>"Yes"</option>
                        <option value="false" selected=move || !form.is_days_based.get()>"No"</option>
                    </select>
                </div>
                <label class="flex items-center gap-2 text-sm text-fg">
                    <input
                        id="is_base_component"
                        type="checkbox"
                        prop:checked=form.is_base_component
                        on:change=move |ev| form.is_base_component.set(event_target_checked(&ev))
                    />
                    "Is Base for Percentage Calculations?"
                </label>
                <div class="flex items-center justify-between border-t border-border pt-4">
                    <a
                        href=SALARY_COMPONENTS_PATH
                        class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                    >
                        "Cancel"
                    </a>
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Ghost.classes())
                            disabled=move || pending.get()
                            on:click=move |_| vm.with_value(|vm| vm.reset())
                        >
                            "Reset Changes"
                        </button>
                        <Button loading=pending attr:type="submit">
                            {submit_label}
                        </Button>
                    </div>
                </div>
            </form>
        }
    };

    view! {
        <div class="mx-auto max-w-2xl">
            <Show when=allowed fallback=|| view! { <AccessDenied /> }>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    {fields}
                </Show>
            </Show>
        </div>
    }
}
