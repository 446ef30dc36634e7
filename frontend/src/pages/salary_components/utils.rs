use crate::api::{ApiError, ComponentType, RecordId, SalaryComponentPayload};
use crate::mutation::{MutationMessages, OutcomeText};
use leptos::*;

pub const DEFAULT_SORT_KEY: &str = "name";
pub const LIST_LOAD_FAILED: &str = "Failed to load salary components";
pub const NAME_REQUIRED: &str = "Component name is required.";
pub const LOAD_FOR_EDIT_FAILED: &str = "Failed to load component data for editing.";
pub const FORM_RESET: &str = "Form has been reset to its original values.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this component? This may affect existing employee salary structures.";

/// Toast text for each salary component mutation.
pub fn mutation_messages() -> MutationMessages {
    MutationMessages {
        create: OutcomeText::new("Component created successfully.", "Creation Failed"),
        update: OutcomeText::new("Component updated successfully.", "Update Failed"),
        delete: OutcomeText::new("Component deleted successfully.", "Deletion failed"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Salary Component"
        } else {
            "Add New Salary Component"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.is_edit() {
            "Update the details for this component."
        } else {
            "Define a new building block for employee salaries."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Save Changes"
        } else {
            "Save Component"
        }
    }
}

/// Editable copy of a [`SalaryComponentPayload`], one signal per field.
#[derive(Clone, Copy)]
pub struct SalaryComponentFormState {
    pub name: RwSignal<String>,
    pub component_type: RwSignal<ComponentType>,
    pub is_days_based: RwSignal<bool>,
    pub is_base_component: RwSignal<bool>,
}

impl SalaryComponentFormState {
    pub fn new(initial: &SalaryComponentPayload) -> Self {
        Self {
            name: create_rw_signal(initial.name.clone()),
            component_type: create_rw_signal(initial.component_type),
            is_days_based: create_rw_signal(initial.is_days_based),
            is_base_component: create_rw_signal(initial.is_base_component),
        }
    }

    pub fn load(&self, values: &SalaryComponentPayload) {
        self.name.set(values.name.clone());
        self.component_type.set(values.component_type);
        self.is_days_based.set(values.is_days_based);
        self.is_base_component.set(values.is_base_component);
    }

    pub fn to_payload(&self) -> SalaryComponentPayload {
        SalaryComponentPayload {
            name: self.name.get_untracked(),
            component_type: self.component_type.get_untracked(),
            is_days_based: self.is_days_based.get_untracked(),
            is_base_component: self.is_base_component.get_untracked(),
        }
    }
}

pub fn validate_payload(payload: SalaryComponentPayload) -> Result<SalaryComponentPayload, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name", NAME_REQUIRED));
    }
    Ok(SalaryComponentPayload {
        name: name.to_string(),
        ..payload
    })
}
