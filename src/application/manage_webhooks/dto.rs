use reqwest::Url;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateWebhookRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "Invalid city id"))]
    pub city_id: i64,
    #[serde(default)]
    #[validate(custom(function = "validate_callback_url"))]
    pub callback_url: String,
}

/// Callbacks are delivered over HTTP, so only `http` and `https` URLs with a host are accepted.
fn validate_callback_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => {
            let mut err = ValidationError::new("invalid_callback_url");
            err.message = Some("Invalid callback_url value".into());
            Err(err)
        }
    }
}
