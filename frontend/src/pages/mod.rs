pub mod forgot_password;
pub mod home;
pub mod leave_management;
pub mod login;
pub mod salary_components;

pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use leave_management::LeaveManagementPage;
pub use login::LoginPage;
pub use salary_components::{SalaryComponentFormPage, SalaryComponentsPage};
