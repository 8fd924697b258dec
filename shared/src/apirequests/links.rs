use serde::{Deserialize, Serialize};

/// The payload of the create-link call.
///
/// The destination is called `ref` on the wire.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(rename = "ref")]
    pub target: String,
    pub slug: String,
}

/// The answer of the create-link call. Only `data == true` counts as success.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkResponse {
    pub data: bool,
    pub message: String,
}

impl CreateLinkResponse {
    #[must_use]
    pub fn created(message: impl Into<String>) -> Self {
        Self {
            data: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            data: false,
            message: message.into(),
        }
    }
}
