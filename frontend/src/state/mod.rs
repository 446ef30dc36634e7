pub mod auth;
pub mod table;
pub mod toast;
