use serde::{Deserialize, Serialize};

use crate::modules::sign_up::core::submission::CreatedUser;

/// JSON body of `POST /signup`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for SignUpPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpPayload")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 2xx response body. Both fields are optional on the wire: any 2xx is an
/// accepted sign-up whatever the body carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpAccepted {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CreatedUser>,
}

/// Non-2xx response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRejectedBody {
    pub message: String,
}
