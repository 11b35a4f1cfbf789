use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscordResponse {
    pub status: u16,
    pub data: Value,
}
