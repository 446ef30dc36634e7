use crate::api::{LeaveDecision, LeaveDecisionPayload, LeaveRequest};
use crate::mutation::{MutationMessages, OutcomeText};
use crate::table::{QueryState, SortDirection};

pub const DEFAULT_SORT_KEY: &str = "start_date";
pub const LIST_LOAD_FAILED: &str = "Failed to load leave requests";

/// Newest leave first.
pub fn initial_query(page_size: usize) -> QueryState {
    QueryState {
        sort_direction: SortDirection::Desc,
        ..QueryState::new(page_size, DEFAULT_SORT_KEY)
    }
}

pub fn mutation_messages() -> MutationMessages {
    MutationMessages {
        update: OutcomeText::new("Leave request updated successfully.", "Update Failed"),
        ..MutationMessages::default()
    }
}

/// A blank comment is left out of the request body.
pub fn decision_payload(decision: LeaveDecision, comment: &str) -> LeaveDecisionPayload {
    let comment = comment.trim();
    LeaveDecisionPayload {
        status: decision,
        comment: (!comment.is_empty()).then(|| comment.to_string()),
    }
}

pub fn employee_label(request: &LeaveRequest) -> String {
    request
        .employee_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Unknown employee")
        .to_string()
}

pub fn period_label(request: &LeaveRequest) -> String {
    if request.start_date == request.end_date {
        request.start_date.to_string()
    } else {
        format!("{} to {}", request.start_date, request.end_date)
    }
}
