use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::LeaveManagementPanel;

#[component]
pub fn LeaveManagementPage() -> impl IntoView {
    view! { <LeaveManagementPanel /> }
}
