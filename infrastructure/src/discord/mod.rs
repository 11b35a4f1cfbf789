mod http;
mod id;
mod method;
mod role;

pub use http::DiscordHttpAdapter;
pub use role::SerenityRole;
