//! Authentication models

use serde::{Deserialize, Serialize};

/// Response to login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer credential for subsequent calls
    pub token: String,

    /// Account email
    pub email: String,
}

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Password reset form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub new_password: String,
}

/// Push-notification device registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FcmTokenRequest {
    pub fcm_token: String,
}

/// Backend health payload (`GET /`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// `UP` when the service is healthy
    #[serde(default)]
    pub status: Option<String>,
}

impl Health {
    pub fn is_up(&self) -> bool {
        self.status.as_deref() == Some("UP")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forgot_password_wire_format() {
        let req = ForgotPasswordRequest {
            email: "ann@example.com".to_string(),
            new_password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["newPassword"], "secret1");
    }

    #[test]
    fn test_fcm_token_wire_format() {
        let json = serde_json::to_value(FcmTokenRequest {
            fcm_token: "device-1".to_string(),
        })
        .unwrap();
        assert_eq!(json["fcmToken"], "device-1");
    }

    #[test]
    fn test_health_status() {
        let up: Health = serde_json::from_str(r#"{"status":"UP"}"#).unwrap();
        assert!(up.is_up());

        let unknown: Health = serde_json::from_str("{}").unwrap();
        assert!(!unknown.is_up());
    }
}
