use crate::services::ApiError;

const UNKNOWN_ERROR: &str = "Error desconocido";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Warning,
    Success,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert--error",
            AlertKind::Warning => "alert--warning",
            AlertKind::Success => "alert--success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Error => "⛔",
            AlertKind::Warning => "⚠️",
            AlertKind::Success => "✅",
        }
    }
}

/// Alerta visible
#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    pub message: String,
    pub kind: AlertKind,
}

/// Lo que acepta `show_alert`: texto, un error o un objeto con `detail`
#[derive(Debug, Clone, PartialEq)]
pub enum AlertInput {
    Text(String),
    Error(String),
    Detail(Option<String>),
}

impl AlertInput {
    pub fn into_message(self) -> String {
        let message = match self {
            AlertInput::Text(text) => text,
            AlertInput::Error(text) => text,
            AlertInput::Detail(detail) => detail.unwrap_or_default(),
        };
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<&str> for AlertInput {
    fn from(text: &str) -> Self {
        AlertInput::Text(text.to_string())
    }
}

impl From<String> for AlertInput {
    fn from(text: String) -> Self {
        AlertInput::Text(text)
    }
}

impl From<ApiError> for AlertInput {
    fn from(error: ApiError) -> Self {
        AlertInput::from(&error)
    }
}

impl From<&ApiError> for AlertInput {
    fn from(error: &ApiError) -> Self {
        match error {
            // `message` ya es el `detail` del servidor cuando lo había
            ApiError::Http { message, .. } => AlertInput::Detail(Some(message.clone())),
            other => AlertInput::Error(other.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_all_input_shapes() {
        assert_eq!(AlertInput::from("Ruta guardada").into_message(), "Ruta guardada");
        assert_eq!(
            AlertInput::Detail(Some("Credenciales inválidas".to_string())).into_message(),
            "Credenciales inválidas"
        );
        let err = ApiError::Http {
            status: 409,
            message: "El email ya existe".to_string(),
        };
        assert_eq!(AlertInput::from(err).into_message(), "El email ya existe");
    }

    #[test]
    fn empty_detail_becomes_unknown_error() {
        assert_eq!(AlertInput::Detail(None).into_message(), "Error desconocido");
        assert_eq!(AlertInput::Detail(Some(String::new())).into_message(), "Error desconocido");
        assert_eq!(AlertInput::from("  ").into_message(), "Error desconocido");
    }

    #[test]
    fn http_errors_carry_their_detail() {
        let err = ApiError::Http {
            status: 401,
            message: "Credenciales inválidas".to_string(),
        };
        assert_eq!(
            AlertInput::from(&err),
            AlertInput::Detail(Some("Credenciales inválidas".to_string()))
        );
        let empty = ApiError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(AlertInput::from(&empty).into_message(), "Error desconocido");
        let net = ApiError::Network("offline".to_string());
        assert_eq!(AlertInput::from(&net).into_message(), "Error de red: offline");
    }

    #[test]
    fn default_kind_is_error() {
        assert_eq!(AlertKind::default(), AlertKind::Error);
        assert_eq!(AlertKind::Success.css_class(), "alert--success");
    }
}
