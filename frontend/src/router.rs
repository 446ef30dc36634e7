use leptos::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, RecordId},
    components::{guard::RequireAuth, layout::Layout, toast::ToastViewport},
    pages::{
        forgot_password::ForgotPasswordPage,
        home::HomePage,
        leave_management::LeaveManagementPage,
        login::LoginPage,
        salary_components::{FormMode, SalaryComponentFormPage, SalaryComponentsPage},
    },
    state::{auth::AuthProvider, toast::provide_toasts},
};

pub use crate::utils::navigation::{HOME_PATH, LOGIN_PATH};

pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const SALARY_COMPONENTS_PATH: &str = "/salary-components";
pub const SALARY_COMPONENT_NEW_PATH: &str = "/salary-components/new";
pub const SALARY_COMPONENT_EDIT_PATH: &str = "/salary-components/:id/edit";
pub const LEAVE_MANAGEMENT_PATH: &str = "/leave-management";

pub const ROUTE_PATHS: &[&str] = &[
    HOME_PATH,
    LOGIN_PATH,
    FORGOT_PASSWORD_PATH,
    SALARY_COMPONENTS_PATH,
    SALARY_COMPONENT_NEW_PATH,
    SALARY_COMPONENT_EDIT_PATH,
    LEAVE_MANAGEMENT_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    SALARY_COMPONENTS_PATH,
    SALARY_COMPONENT_NEW_PATH,
    SALARY_COMPONENT_EDIT_PATH,
    LEAVE_MANAGEMENT_PATH,
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH, FORGOT_PASSWORD_PATH];

pub fn salary_component_edit_path(id: &RecordId) -> String {
    SALARY_COMPONENT_EDIT_PATH.replace(":id", id.as_str())
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_toasts();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=FORGOT_PASSWORD_PATH view=ForgotPasswordPage/>
                    <Route path=SALARY_COMPONENTS_PATH view=ProtectedSalaryComponents/>
                    <Route path=SALARY_COMPONENT_NEW_PATH view=ProtectedSalaryComponentCreate/>
                    <Route path=SALARY_COMPONENT_EDIT_PATH view=ProtectedSalaryComponentEdit/>
                    <Route path=LEAVE_MANAGEMENT_PATH view=ProtectedLeaveManagement/>
                </Routes>
            </Router>
            <ToastViewport/>
        </AuthProvider>
    }
}

#[component]
fn ProtectedSalaryComponents() -> impl IntoView {
    view! { <RequireAuth><Layout><SalaryComponentsPage/></Layout></RequireAuth> }
}

#[component]
fn ProtectedSalaryComponentCreate() -> impl IntoView {
    view! {
        <RequireAuth>
            <Layout><SalaryComponentFormPage mode=FormMode::Create/></Layout>
        </RequireAuth>
    }
}

#[component]
fn ProtectedSalaryComponentEdit() -> impl IntoView {
    let params = use_params_map();
    let mode = store_value(params.with_untracked(|params| match params.get("id") {
        Some(id) => FormMode::Edit(RecordId::from(id.as_str())),
        None => FormMode::Create,
    }));
    view! {
        <RequireAuth>
            <Layout><SalaryComponentFormPage mode=mode.get_value()/></Layout>
        </RequireAuth>
    }
}

#[component]
fn ProtectedLeaveManagement() -> impl IntoView {
    view! { <RequireAuth><Layout><LeaveManagementPage/></Layout></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_management_routes() {
        assert!(ROUTE_PATHS.contains(&"/salary-components"));
        assert!(ROUTE_PATHS.contains(&"/leave-management"));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn public_and_protected_partition_all_routes() {
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        assert!(public.is_disjoint(&protected));
        assert_eq!(public.len() + protected.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn edit_path_embeds_the_record_id() {
        assert_eq!(
            salary_component_edit_path(&RecordId::from(9)),
            "/salary-components/9/edit"
        );
    }
}
