use super::utils::LoginFormState;
use crate::api::ApiError;
use crate::api::LoginRequest;
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates locally and only then asks the server.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigator = navigation::use_navigator();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.clear_password();
                    navigator.go(navigation::HOME_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
