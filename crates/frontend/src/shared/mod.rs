pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_controller;
