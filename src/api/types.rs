use serde::{Deserialize, Deserializer, Serialize};

use crate::core::messages::Message;

// ============================================================================
// Enquiry (POST)
// ============================================================================

/// The record the enquire endpoint expects inside `data`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnquiryPayload {
    pub hotel: i64,
    pub enquiry_hotel: String,
    pub enquiry_location: String,
    pub enquiry_name: String,
    pub enquiry_email: String,
}

/// `{"data": {...}}` wrapper used by every write to the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// ============================================================================
// Messages (GET)
// ============================================================================

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageAttributes {
    pub message_from: String,
    pub message_email: String,
    pub message_message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub attributes: MessageAttributes,
}

pub type MessagesResponse = DataEnvelope<Vec<MessageRecord>>;

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message {
            id: record.id,
            sender_name: record.attributes.message_from,
            sender_email: record.attributes.message_email,
            body: record.attributes.message_message,
        }
    }
}

/// Accepts `"7"` or `7` for an id and yields `"7"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
