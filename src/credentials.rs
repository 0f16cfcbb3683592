//! Login credentials issued by a homeserver.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The session material a homeserver hands out on a successful login.
///
/// `refresh_token` and `device_id` are only present when the server issued
/// them; both stay out of the persisted document when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    user_id: String,
    home_server: String,
    access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_id: Option<String>,
}

impl Credentials {
    /// Create credentials from the required login fields.
    pub fn new(
        user_id: impl Into<String>,
        home_server: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            home_server: home_server.into(),
            access_token: access_token.into(),
            refresh_token: None,
            device_id: None,
        }
    }

    /// Attach a refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Attach the device ID the server assigned to this login.
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// The fully qualified user ID.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The server name the credentials were issued by.
    pub fn home_server(&self) -> &str {
        &self.home_server
    }

    /// The opaque access token sent with every authenticated request.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The refresh token, if the server issued one.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// The device ID, if the server assigned one.
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Encode to a JSON object.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode from a JSON object.
    ///
    /// `user_id`, `home_server`, and `access_token` are required; the other
    /// fields default to unset.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}
