use serde::{Deserialize, Serialize};

/// Loyalty-level change event as published on the notification queue.
///
/// Every field is optional: the relay extracts what is present and forwards,
/// it does not validate the event shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Whatever JSON object the notification service answers with. No schema is
/// enforced beyond it being valid JSON.
pub type NotificationResult = serde_json::Value;
