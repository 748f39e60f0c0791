pub mod use_controller;
pub mod use_connection_status;
