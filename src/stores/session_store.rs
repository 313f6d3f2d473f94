// ============================================================================
// SESSION STORE - Usuario y token de la sesión actual
// ============================================================================
// Estado plano compatible con use_state_handle; la persistencia vive aquí
// para que el hook solo decida cuándo guardar
// ============================================================================

use crate::models::{AlertInput, AlertKind, AlertMessage, User};
use crate::services::{ApiError, LoggedIn};
use crate::utils::{
    load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage,
    STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_USER,
};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionStore {
    pub user: Option<User>,
    /// Vacío = sin token
    pub token: String,
}

impl SessionStore {
    /// Estado inicial leído de localStorage. Un `user` corrupto se ignora.
    pub fn load() -> Self {
        let token = load_raw(STORAGE_KEY_ACCESS_TOKEN).unwrap_or_default();
        let user = load_from_storage::<User>(STORAGE_KEY_USER);
        Self { user, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() || !self.token.is_empty()
    }

    /// Token para `Authorization`, si hay alguno
    pub fn bearer(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    /// Nuevo estado tras un login: sin usuario se conserva el anterior
    pub fn with_login(&self, user: Option<User>, token: String) -> Self {
        Self {
            user: user.or_else(|| self.user.clone()),
            token,
        }
    }

    /// Resultado de un intento de login: la sesión siguiente y, si falló,
    /// la alerta a mostrar. Un fallo deja la sesión como estaba.
    pub fn after_login(&self, outcome: Result<LoggedIn, ApiError>) -> (SessionStore, Option<AlertMessage>) {
        match outcome {
            Ok(LoggedIn { user, token }) => (self.with_login(user, token), None),
            Err(error) => {
                let alert = AlertMessage {
                    message: AlertInput::from(&error).into_message(),
                    kind: AlertKind::Error,
                };
                (self.clone(), Some(alert))
            }
        }
    }

    pub fn persist(&self) {
        if let Err(e) = save_raw(STORAGE_KEY_ACCESS_TOKEN, &self.token) {
            log::error!("❌ [SESSION] {}", e);
        }
        match &self.user {
            Some(user) => {
                if let Err(e) = save_to_storage(STORAGE_KEY_USER, user) {
                    log::error!("❌ [SESSION] {}", e);
                }
            }
            None => remove_from_storage(STORAGE_KEY_USER),
        }
    }

    pub fn clear_storage() {
        remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
        remove_from_storage(STORAGE_KEY_USER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: Some("u1".to_string()),
            email: Some(format!("{}@rex.app", name)),
            username: Some(name.to_string()),
        }
    }

    #[test]
    fn empty_session_is_anonymous() {
        let session = SessionStore::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn token_alone_counts_as_authenticated() {
        let session = SessionStore::default().with_login(None, "abc".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.bearer(), Some("abc"));
        assert!(session.user.is_none());
    }

    #[test]
    fn login_without_user_keeps_previous_user() {
        let session = SessionStore {
            user: Some(user("ana")),
            token: "old".to_string(),
        };
        let next = session.with_login(None, "new".to_string());
        assert_eq!(next.user, Some(user("ana")));
        assert_eq!(next.token, "new");

        let next = session.with_login(Some(user("bea")), "newer".to_string());
        assert_eq!(next.user, Some(user("bea")));
    }

    #[test]
    fn wrong_password_keeps_session_and_shows_server_detail() {
        let session = SessionStore {
            user: Some(user("ana")),
            token: "old".to_string(),
        };
        let rejected = ApiError::Http {
            status: 401,
            message: crate::services::extract_error_message(401, r#"{"detail": "Credenciales inválidas"}"#),
        };

        let (next, alert) = session.after_login(Err(rejected));
        assert_eq!(next, session);
        assert_eq!(
            alert,
            Some(AlertMessage {
                message: "Credenciales inválidas".to_string(),
                kind: AlertKind::Error,
            })
        );
    }

    #[test]
    fn successful_login_replaces_token_without_alert() {
        let (next, alert) = SessionStore::default().after_login(Ok(LoggedIn {
            user: Some(user("bea")),
            token: "fresh".to_string(),
        }));
        assert!(alert.is_none());
        assert_eq!(next.bearer(), Some("fresh"));
        assert_eq!(next.user, Some(user("bea")));
    }
}
