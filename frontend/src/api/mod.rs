mod auth;
pub mod client;
pub mod leave_requests;
pub mod listing;
pub mod salary_components;
pub mod types;

pub use client::*;
pub use leave_requests::LeaveRequestApi;
pub use listing::ListEndpoint;
pub use salary_components::SalaryComponentApi;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
