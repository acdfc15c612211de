use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::{
    clients::notification::NotificationSender, error::RelayError,
    models::message::NotificationResult, token::TokenIssuer,
};

/// Message-to-REST forwarding path: subject extraction, token minting, one
/// outbound HTTP call, response logging. Performs no local recovery — every
/// failure propagates to the listener boundary.
pub struct Forwarder {
    token_issuer: Arc<dyn TokenIssuer>,
    sender: Arc<dyn NotificationSender>,
}

impl Forwarder {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>, sender: Arc<dyn NotificationSender>) -> Self {
        Self {
            token_issuer,
            sender,
        }
    }

    pub async fn forward(&self, payload: &str) -> Result<NotificationResult, RelayError> {
        info!(payload, "Sending payload to the notification service");

        let subject = extract_subject(payload)?;
        let token = self.token_issuer.issue(&subject)?;

        let result = self.sender.send(&token, payload).await?;

        info!(response = %result, "Received response from the notification service");

        Ok(result)
    }
}

/// The subject is the top-level `id` field of the payload. A payload without
/// one is forwarded under the literal subject `"null"` rather than rejected.
fn extract_subject(payload: &str) -> Result<String, RelayError> {
    let document: Value = serde_json::from_str(payload)?;

    let subject = match document.get("id") {
        Some(Value::String(id)) => id.clone(),
        _ => "null".to_string(),
    };

    Ok(subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_subject_from_id_field() {
        let subject = extract_subject(r#"{"id":"user42","amount":10.5}"#).unwrap();
        assert_eq!(subject, "user42");
    }

    #[test]
    fn test_missing_id_defaults_to_null_literal() {
        let subject = extract_subject(r#"{"amount":10.5}"#).unwrap();
        assert_eq!(subject, "null");
    }

    #[test]
    fn test_non_string_id_defaults_to_null_literal() {
        let subject = extract_subject(r#"{"id":42}"#).unwrap();
        assert_eq!(subject, "null");
    }

    #[test]
    fn test_malformed_payload_is_a_json_error() {
        let result = extract_subject("{not json");
        assert!(matches!(result, Err(RelayError::Json(_))));
    }
}
