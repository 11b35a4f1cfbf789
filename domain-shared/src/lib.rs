pub mod color;
pub mod discord;
