//! Session Model (로그인 사용자)

use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth provider tag carried by the session user
///
/// Login is mocked; the tag only records which button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Kakao,
    Google,
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Kakao => "kakao",
            Self::Google => "google",
        };
        write!(f, "{}", s)
    }
}

impl AuthProvider {
    /// Demo display name used when the login payload omits one
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Kakao => "카카오 사용자",
            Self::Google => "Google 사용자",
        }
    }

    /// Demo email used when the login payload omits one
    pub fn default_email(&self) -> &'static str {
        match self {
            Self::Kakao => "user@kakao.com",
            Self::Google => "user@gmail.com",
        }
    }
}

/// The signed-in user; at most one session at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: AuthProvider,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub provider: AuthProvider,
    /// Overrides the provider's demo name when present
    pub name: Option<String>,
    /// Overrides the provider's demo email when present
    pub email: Option<String>,
}
