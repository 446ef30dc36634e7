use super::repository::SalaryComponentRepository;
use super::utils::{mutation_messages, DEFAULT_SORT_KEY, LIST_LOAD_FAILED};
use crate::api::{ApiError, ListEndpoint, RecordId, SalaryComponent};
use crate::config;
use crate::mutation::{Mutation, MutationCoordinator};
use crate::permissions::SalaryComponentAccess;
use crate::state::auth::use_permissions;
use crate::state::table::{use_table, TableHandle};
use crate::state::toast::use_notifier;
use crate::table::{QueryState, RefetchTrigger};
use leptos::*;
use std::time::Duration;

pub type SalaryComponentTable = TableHandle<ListEndpoint<SalaryComponent>>;

#[derive(Clone)]
pub struct SalaryComponentsViewModel {
    pub access: Memo<SalaryComponentAccess>,
    pub table: SalaryComponentTable,
    /// Component awaiting a yes/no answer before it is deleted.
    pub pending_delete: RwSignal<Option<RecordId>>,
    pub delete_action: Action<RecordId, Result<(), ApiError>>,
}

impl SalaryComponentsViewModel {
    pub fn request_delete(&self, id: RecordId) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(id);
        }
    }
}

pub fn use_salary_components_view_model() -> SalaryComponentsViewModel {
    let repository = SalaryComponentRepository::from_context();
    let permissions = use_permissions();
    let access =
        create_memo(move |_| permissions.with(|set| SalaryComponentAccess::evaluate(set.as_ref())));

    let settings = config::current();
    let trigger = RefetchTrigger::new();
    let table = use_table(
        repository.list_source(),
        QueryState::new(settings.default_page_size, DEFAULT_SORT_KEY),
        trigger.clone(),
        Duration::from_millis(settings.search_debounce_ms),
        Signal::derive(move || access.get().can_read),
        LIST_LOAD_FAILED,
    );

    let coordinator = MutationCoordinator::new(
        repository.backend(),
        use_notifier(),
        trigger,
        mutation_messages(),
    );
    let reload = table.clone();
    let delete_action = create_action(move |id: &RecordId| {
        let coordinator = coordinator.clone();
        let table = reload.clone();
        let id = id.clone();
        async move {
            let result = coordinator.execute(Mutation::Delete { id }).await;
            if result.is_ok() {
                table.sync_trigger();
            }
            result
        }
    });

    SalaryComponentsViewModel {
        access,
        table,
        pending_delete: create_rw_signal(None),
        delete_action,
    }
}
