#[cfg(test)]
pub mod clock;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{RecordId, UserResponse};
    use crate::permissions::capabilities::*;
    use crate::state::auth::AuthState;
    use leptos::*;

    fn user(id: i64, username: &str, is_master: bool, permissions: &[&str]) -> UserResponse {
        UserResponse {
            id: RecordId::from(id),
            username: username.into(),
            full_name: None,
            is_master,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn master_user() -> UserResponse {
        user(1, "root", true, &[])
    }

    /// Can open both management pages and read their data, but not change
    /// salary components.
    pub fn hr_manager() -> UserResponse {
        user(
            2,
            "hr.manager",
            false,
            &[
                PAGE_SALARY_MANAGEMENT,
                SALARY_COMPONENT_READ,
                PAGE_LEAVE_MANAGEMENT,
                LEAVE_MANAGEMENT_READ_ALL,
            ],
        )
    }

    pub fn payroll_admin() -> UserResponse {
        user(
            3,
            "payroll.admin",
            false,
            &[
                PAGE_SALARY_MANAGEMENT,
                SALARY_COMPONENT_READ,
                SALARY_COMPONENT_CREATE,
                SALARY_COMPONENT_UPDATE,
                SALARY_COMPONENT_DELETE,
            ],
        )
    }

    pub fn page_only_user() -> UserResponse {
        user(4, "viewer", false, &[PAGE_SALARY_MANAGEMENT, PAGE_LEAVE_MANAGEMENT])
    }

    pub fn employee() -> UserResponse {
        user(5, "employee", false, &[])
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
