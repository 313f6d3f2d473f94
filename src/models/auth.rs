use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Identidad del usuario (`/auth/me` o embebida en el login)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Usuario".to_string())
    }

    /// Inicial para el avatar por defecto
    pub fn initial(&self) -> String {
        self.username
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    pub fn token(&self) -> String {
        self.access_token.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_only_response_decodes() {
        let json = r#"{"access_token": "abc", "refresh_token": "def", "token_type": "bearer"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token(), "abc");
        assert!(resp.user.is_none());
    }

    #[test]
    fn user_display_helpers() {
        let user: User =
            serde_json::from_str(r#"{"id": "1", "email": "ana@rex.es", "username": "ana"}"#).unwrap();
        assert_eq!(user.display_name(), "ana");
        assert_eq!(user.initial(), "A");

        let anon = User::default();
        assert_eq!(anon.display_name(), "Usuario");
        assert_eq!(anon.initial(), "?");
    }
}
