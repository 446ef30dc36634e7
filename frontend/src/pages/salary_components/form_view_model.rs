use super::repository::SalaryComponentRepository;
use super::utils::{
    mutation_messages, validate_payload, FormMode, SalaryComponentFormState, FORM_RESET,
    LOAD_FOR_EDIT_FAILED,
};
use crate::api::{ApiError, SalaryComponentPayload};
use crate::mutation::{Mutation, MutationCoordinator, Notification, Notifier};
use crate::permissions::SalaryComponentAccess;
use crate::router::SALARY_COMPONENTS_PATH;
use crate::state::auth::use_permissions;
use crate::state::toast::use_notifier;
use crate::table::RefetchTrigger;
use crate::utils::navigation::{use_navigator, Navigator};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct SalaryComponentFormViewModel {
    pub mode: FormMode,
    pub access: Memo<SalaryComponentAccess>,
    pub form: SalaryComponentFormState,
    /// Values the form was opened with, restored by "Reset Changes".
    pub original: RwSignal<SalaryComponentPayload>,
    pub loading: RwSignal<bool>,
    pub name_error: RwSignal<Option<String>>,
    pub submit_action: Action<SalaryComponentPayload, Result<(), ApiError>>,
    repository: SalaryComponentRepository,
    notifier: Rc<dyn Notifier>,
    navigator: Navigator,
}

impl SalaryComponentFormViewModel {
    /// Whether the current user may submit this form at all.
    pub fn can_submit(&self) -> bool {
        let access = self.access.get();
        match self.mode {
            FormMode::Create => access.can_create,
            FormMode::Edit(_) => access.can_update,
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match validate_payload(self.form.to_payload()) {
            Ok(payload) => {
                self.name_error.set(None);
                self.submit_action.dispatch(payload);
            }
            Err(err) => self.name_error.set(Some(err.to_string())),
        }
    }

    pub fn reset(&self) {
        self.form.load(&self.original.get_untracked());
        self.name_error.set(None);
        self.notifier.notify(Notification::info(FORM_RESET));
    }

    /// Fetches the record being edited. On failure the user is told and
    /// sent back to the list.
    pub async fn load_existing(&self) {
        let Some(id) = self.mode.record_id() else {
            return;
        };
        self.loading.set(true);
        match self.repository.fetch(id).await {
            Ok(component) => {
                let values = SalaryComponentPayload::from(&component);
                self.form.load(&values);
                self.original.set(values);
            }
            Err(err) => {
                log::warn!("loading salary component {} failed: {}", id, err);
                self.notifier.notify(Notification::error(LOAD_FOR_EDIT_FAILED));
                self.navigator.go(SALARY_COMPONENTS_PATH);
            }
        }
        self.loading.try_set(false);
    }
}

pub fn use_salary_component_form_view_model(mode: FormMode) -> SalaryComponentFormViewModel {
    let repository = SalaryComponentRepository::from_context();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let permissions = use_permissions();
    let access =
        create_memo(move |_| permissions.with(|set| SalaryComponentAccess::evaluate(set.as_ref())));

    let defaults = SalaryComponentPayload::default();
    let form = SalaryComponentFormState::new(&defaults);

    // The list page owns its own trigger and reloads when it mounts again.
    let coordinator = MutationCoordinator::new(
        repository.backend(),
        notifier.clone(),
        RefetchTrigger::new(),
        mutation_messages(),
    );
    let target = mode.clone();
    let back_to_list = navigator.clone();
    let submit_action = create_action(move |payload: &SalaryComponentPayload| {
        let coordinator = coordinator.clone();
        let navigator = back_to_list.clone();
        let mutation = match &target {
            FormMode::Create => Mutation::Create(payload.clone()),
            FormMode::Edit(id) => Mutation::Update {
                id: id.clone(),
                payload: payload.clone(),
            },
        };
        async move {
            let result = coordinator.execute(mutation).await;
            if result.is_ok() {
                navigator.go(SALARY_COMPONENTS_PATH);
            }
            result
        }
    });

    let vm = SalaryComponentFormViewModel {
        loading: create_rw_signal(mode.is_edit()),
        mode,
        access,
        form,
        original: create_rw_signal(defaults),
        name_error: create_rw_signal(None),
        submit_action,
        repository,
        notifier,
        navigator,
    };

    if vm.mode.is_edit() {
        let loader = vm.clone();
        create_effect(move |_| {
            let loader = loader.clone();
            spawn_local(async move { loader.load_existing().await });
        });
    }

    vm
}
