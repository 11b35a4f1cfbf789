pub mod discord;
pub mod role;
