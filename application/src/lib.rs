pub mod config;
pub mod direct_role_color;
pub mod role_color;
