use super::repository::LeaveRequestRepository;
use super::utils::{decision_payload, initial_query, mutation_messages, LIST_LOAD_FAILED};
use crate::api::{ApiError, LeaveDecision, LeaveRequest, ListEndpoint};
use crate::config;
use crate::mutation::{Mutation, MutationCoordinator};
use crate::permissions::LeaveManagementAccess;
use crate::state::auth::use_permissions;
use crate::state::table::{use_table, TableHandle};
use crate::state::toast::use_notifier;
use crate::table::RefetchTrigger;
use leptos::*;
use std::time::Duration;

pub type LeaveRequestTable = TableHandle<ListEndpoint<LeaveRequest>>;

#[derive(Clone)]
pub struct LeaveManagementViewModel {
    pub access: Memo<LeaveManagementAccess>,
    pub table: LeaveRequestTable,
    /// Request shown in the update dialog.
    pub selected: RwSignal<Option<LeaveRequest>>,
    pub comment: RwSignal<String>,
    pub decide_action: Action<LeaveDecision, Result<(), ApiError>>,
}

impl LeaveManagementViewModel {
    /// Only pending requests can be decided on.
    pub fn open(&self, request: LeaveRequest) {
        if !request.is_pending() {
            return;
        }
        self.comment.set(String::new());
        self.selected.set(Some(request));
    }

    pub fn close(&self) {
        self.selected.set(None);
        self.comment.set(String::new());
    }

    pub fn refresh(&self) {
        self.table.refetch();
    }
}

pub fn use_leave_management_view_model() -> LeaveManagementViewModel {
    let repository = LeaveRequestRepository::from_context();
    let permissions = use_permissions();
    let access =
        create_memo(move |_| permissions.with(|set| LeaveManagementAccess::evaluate(set.as_ref())));

    let settings = config::current();
    let trigger = RefetchTrigger::new();
    let table = use_table(
        repository.list_source(),
        initial_query(settings.default_page_size),
        trigger.clone(),
        Duration::from_millis(settings.search_debounce_ms),
        Signal::derive(move || {
            let access = access.get();
            access.can_view_page && access.can_view_data
        }),
        LIST_LOAD_FAILED,
    );

    let coordinator = MutationCoordinator::new(
        repository.backend(),
        use_notifier(),
        trigger,
        mutation_messages(),
    );
    let selected = create_rw_signal(None::<LeaveRequest>);
    let comment = create_rw_signal(String::new());
    let reload = table.clone();
    let decide_action = create_action(move |decision: &LeaveDecision| {
        let coordinator = coordinator.clone();
        let table = reload.clone();
        let target = selected.get_untracked().map(|request| request.id);
        let payload = decision_payload(*decision, &comment.get_untracked());
        async move {
            let Some(id) = target else {
                return Err(ApiError::validation("request", "No leave request selected."));
            };
            let result = coordinator.execute(Mutation::Update { id, payload }).await;
            if result.is_ok() {
                selected.try_set(None);
                comment.try_set(String::new());
                table.sync_trigger();
            }
            result
        }
    });

    LeaveManagementViewModel {
        access,
        table,
        selected,
        comment,
        decide_action,
    }
}
