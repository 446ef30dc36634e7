use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
    permissions::PermissionSet,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// Capabilities of the signed-in user. `None` while signed out, which
    /// every permission check treats as "deny".
    pub fn permissions(&self) -> Option<PermissionSet> {
        self.user.as_ref().map(UserResponse::permission_set)
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        let user = match api_client.get_me().await {
            Ok(user) => user,
            Err(err) => {
                log::warn!("session check failed: {}", err);
                None
            }
        };
        set_auth_state.update(|state| {
            state.is_authenticated = user.is_some();
            state.user = user;
            state.loading = false;
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_permissions() -> Signal<Option<PermissionSet>> {
    let (auth, _) = use_auth();
    Signal::derive(move || auth.with(AuthState::permissions))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&request).await {
        Ok(response) => {
            log::info!("signed in as {}", response.user.username);
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Clears the local session even when the server call fails.
pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::from_context();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{hr_manager, master_user};
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn permissions_follow_the_signed_in_user() {
        with_runtime(|| {
            let (auth, set_auth) = create_signal(AuthState::default());
            provide_context((auth, set_auth));
            let permissions = use_permissions();
            assert_eq!(permissions.get(), None);

            set_auth.update(|state| state.user = Some(hr_manager()));
            let set = permissions.get().unwrap();
            assert!(set.contains("pages.salary_management"));
            assert!(!set.is_master);

            set_auth.update(|state| state.user = Some(master_user()));
            assert!(permissions.get().unwrap().is_master);
        });
    }
}
