use super::repository::ForgotPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::mutation::{Notification, Notifier};
use crate::state::toast::use_notifier;
use leptos::*;
use std::rc::Rc;

pub const IDENTIFIER_REQUIRED: &str = "Please enter your email, phone, or employee ID.";
pub const RESET_FAILED: &str = "Failed to send reset link. Please try again.";
pub const RESET_FAILED_TOAST: &str = "An error occurred. Please try again.";
pub const RESET_SENT_TOAST: &str = "Password reset link has been sent to your email.";
pub const RESET_CONFIRMATION: &str = "If an account with that identifier exists, a password reset link has been sent. Please check your inbox.";

#[derive(Clone)]
pub struct ForgotPasswordViewModel {
    pub identifier: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submitted: RwSignal<bool>,
    pub submit_action: Action<String, Result<MessageResponse, ApiError>>,
    notifier: Rc<dyn Notifier>,
}

impl ForgotPasswordViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let identifier = self.identifier.get_untracked().trim().to_string();
        if identifier.is_empty() {
            self.error.set(Some(IDENTIFIER_REQUIRED.to_string()));
            return;
        }
        self.error.set(None);
        self.submitted.set(false);
        self.submit_action.dispatch(identifier);
    }

    pub fn apply_result(&self, result: Result<MessageResponse, ApiError>) {
        match result {
            Ok(_) => {
                self.error.set(None);
                self.submitted.set(true);
                self.notifier.notify(Notification::success(RESET_SENT_TOAST));
            }
            Err(err) => {
                log::warn!("password reset request failed: {}", err);
                self.error.set(Some(RESET_FAILED.to_string()));
                self.notifier.notify(Notification::error(RESET_FAILED_TOAST));
            }
        }
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let submit_action = create_action(move |identifier: &String| {
        let repo = repository.clone();
        let identifier = identifier.clone();
        async move { repo.request_reset(&identifier).await }
    });

    let vm = ForgotPasswordViewModel {
        identifier: create_rw_signal(String::new()),
        error: create_rw_signal(None),
        submitted: create_rw_signal(false),
        submit_action,
        notifier: use_notifier(),
    };

    let handler = vm.clone();
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            handler.apply_result(result);
        }
    });

    vm
}
