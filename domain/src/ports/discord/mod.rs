mod request;
mod response;

pub use request::{DiscordRequest, Method};
pub use response::DiscordResponse;
use async_trait::async_trait;
use serde_json::Value;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Raw access to the Discord REST API. One call sends exactly one request.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordHttpPort {
    async fn execute(&self, request: DiscordRequest) -> Result<DiscordResponse, DiscordHttpError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DiscordHttpError {
    #[error("Discord responded with status {status}")]
    Status { status: u16, data: Value },
    #[error("Discord request failed: {0}")]
    Transport(#[source] Error),
}

impl DiscordHttpError {
    /// Body Discord sent along with an error status. `null`, `false`, `0` and
    /// `""` count as nothing sent.
    pub fn response_data(&self) -> Option<&Value> {
        match self {
            DiscordHttpError::Status { data, .. } if !is_blank(data) => Some(data),
            DiscordHttpError::Status { .. } | DiscordHttpError::Transport(_) => None,
        }
    }
}

fn is_blank(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_data_of_status_error() {
        let err = DiscordHttpError::Status {
            status: 403,
            data: json!({ "code": 50013 }),
        };
        assert_eq!(err.response_data(), Some(&json!({ "code": 50013 })));
    }

    #[test]
    fn null_response_data_is_absent() {
        let err = DiscordHttpError::Status {
            status: 502,
            data: Value::Null,
        };
        assert_eq!(err.response_data(), None);
    }

    #[test]
    fn blank_scalar_response_data_is_absent() {
        for data in [json!(false), json!(0), json!(0.0), json!("")] {
            let err = DiscordHttpError::Status { status: 400, data };
            assert_eq!(err.response_data(), None);
        }
    }

    #[test]
    fn non_blank_scalars_and_empty_containers_are_kept() {
        for data in [json!(true), json!(7), json!("Bad Gateway"), json!([]), json!({})] {
            let err = DiscordHttpError::Status {
                status: 400,
                data: data.clone(),
            };
            assert_eq!(err.response_data(), Some(&data));
        }
    }

    #[test]
    fn transport_error_has_no_response_data() {
        let err = DiscordHttpError::Transport("connection reset".into());
        assert_eq!(err.response_data(), None);
        assert_eq!(err.to_string(), "Discord request failed: connection reset");
    }
}
