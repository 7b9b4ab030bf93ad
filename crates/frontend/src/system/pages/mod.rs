pub mod login;
pub mod not_authorized;
