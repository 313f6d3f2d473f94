use thiserror::Error;

use crate::models::{LoginRequest, RegisterRequest, User};
use crate::services::{ApiClient, ApiError};

/// Credenciales obtenidas tras un login correcto
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedIn {
    pub user: Option<User>,
    pub token: String,
}

/// Login con email y contraseña.
/// Si la respuesta no trae el usuario se intenta `/auth/me`; si eso falla
/// el login sigue siendo válido.
pub async fn perform_login(api: &ApiClient, email: &str, password: &str) -> Result<LoggedIn, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = api.login(&request).await?;
    let token = response.token();
    if token.is_empty() {
        return Err(ApiError::Decode("la respuesta de login no incluye access_token".to_string()));
    }

    let user = match response.user {
        Some(user) => Some(user),
        None => match api.me(&token, None).await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("⚠️ [AUTH] No se pudo obtener /auth/me tras el login: {}", e);
                None
            }
        },
    };

    log::info!("✅ [AUTH] Login correcto");
    Ok(LoggedIn { user, token })
}

/// Fallo del registro, distinguiendo si la cuenta llegó a crearse
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignupError {
    #[error("{0}")]
    Register(ApiError),

    /// La cuenta existe; falló el login automático
    #[error("Cuenta creada, pero no se pudo iniciar sesión: {0}")]
    Login(ApiError),
}

/// Registro seguido de login automático
pub async fn perform_signup(
    api: &ApiClient,
    email: &str,
    username: &str,
    password: &str,
) -> Result<LoggedIn, SignupError> {
    let request = RegisterRequest {
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    };
    api.register(&request).await.map_err(SignupError::Register)?;
    log::info!("✅ [AUTH] Cuenta creada para {}, iniciando sesión", username);
    perform_login(api, email, password).await.map_err(SignupError::Login)
}

/// Dónde mostrar un error de registro
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupErrorTarget {
    Email(String),
    Username(String),
    Form(String),
    /// Registro correcto pero sin sesión: pasar a login
    AccountCreated,
}

/// Un 409 se asocia al campo que menciona; el resto va al banner del formulario
pub fn classify_signup_error(error: &SignupError) -> SignupErrorTarget {
    let error = match error {
        SignupError::Login(_) => return SignupErrorTarget::AccountCreated,
        SignupError::Register(error) => error,
    };
    let message = error.user_message();
    if error.status() == Some(409) {
        let lower = message.to_lowercase();
        if lower.contains("email") {
            return SignupErrorTarget::Email(message);
        }
        if lower.contains("usuario") || lower.contains("username") {
            return SignupErrorTarget::Username(message);
        }
    }
    SignupErrorTarget::Form(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict(message: &str) -> SignupError {
        SignupError::Register(ApiError::Http {
            status: 409,
            message: message.to_string(),
        })
    }

    #[test]
    fn conflicts_are_routed_to_fields() {
        assert_eq!(
            classify_signup_error(&conflict("El email ya está registrado")),
            SignupErrorTarget::Email("El email ya está registrado".to_string())
        );
        assert_eq!(
            classify_signup_error(&conflict("Nombre de Usuario en uso")),
            SignupErrorTarget::Username("Nombre de Usuario en uso".to_string())
        );
        assert!(matches!(
            classify_signup_error(&conflict("Conflicto")),
            SignupErrorTarget::Form(_)
        ));
    }

    #[test]
    fn non_conflict_errors_go_to_form_banner() {
        let err = SignupError::Register(ApiError::Http {
            status: 422,
            message: "email inválido".to_string(),
        });
        assert!(matches!(classify_signup_error(&err), SignupErrorTarget::Form(_)));
        let err = SignupError::Register(ApiError::Network("offline".to_string()));
        assert!(matches!(classify_signup_error(&err), SignupErrorTarget::Form(_)));
    }

    #[test]
    fn failed_auto_login_means_account_exists() {
        let err = SignupError::Login(ApiError::Http {
            status: 500,
            message: "Error 500".to_string(),
        });
        assert_eq!(classify_signup_error(&err), SignupErrorTarget::AccountCreated);
    }
}
