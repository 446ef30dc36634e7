use leptos::*;

mod form_panel;
pub mod form_view_model;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use form_panel::SalaryComponentFormPanel;
pub use panel::SalaryComponentsPanel;
pub use utils::FormMode;

#[component]
pub fn SalaryComponentsPage() -> impl IntoView {
    view! { <SalaryComponentsPanel /> }
}

#[component]
pub fn SalaryComponentFormPage(mode: FormMode) -> impl IntoView {
    view! { <SalaryComponentFormPanel mode=mode /> }
}
