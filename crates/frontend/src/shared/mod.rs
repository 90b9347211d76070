pub mod api_utils;
pub mod components;
pub mod list_controller;
pub mod list_page;
pub mod list_utils;
