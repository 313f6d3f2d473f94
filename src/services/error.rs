use thiserror::Error;

/// Fallo de una llamada al API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    #[error("No se pudo preparar la petición: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Mensaje legible a partir del cuerpo de un error HTTP.
/// FastAPI responde `{"detail": "..."}` o `{"detail": [{"msg": "..."}]}`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let body = body.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let from_json = match value.get("detail") {
            Some(serde_json::Value::String(detail)) => Some(detail.clone()),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string),
            _ => value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
        };
        if let Some(message) = from_json.filter(|m| !m.trim().is_empty()) {
            return message;
        }
    }

    if body.is_empty() {
        format!("Error {}", status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastapi_string_detail() {
        let msg = extract_error_message(401, r#"{"detail": "Credenciales inválidas"}"#);
        assert_eq!(msg, "Credenciales inválidas");
    }

    #[test]
    fn fastapi_validation_list_uses_first_msg() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email"}]}"#;
        assert_eq!(extract_error_message(422, body), "value is not a valid email");
    }

    #[test]
    fn plain_text_and_empty_bodies() {
        assert_eq!(extract_error_message(500, "Internal Server Error"), "Internal Server Error");
        assert_eq!(extract_error_message(502, "   "), "Error 502");
        assert_eq!(extract_error_message(400, r#"{"detail": ""}"#), r#"{"detail": ""}"#);
    }

    #[test]
    fn status_is_only_known_for_http_errors() {
        let http = ApiError::Http {
            status: 404,
            message: "Ruta no encontrada".to_string(),
        };
        assert_eq!(http.status(), Some(404));
        assert_eq!(http.user_message(), "Ruta no encontrada");

        let net = ApiError::Network("failed to fetch".to_string());
        assert_eq!(net.status(), None);
        assert_eq!(net.user_message(), "Error de red: failed to fetch");
    }
}
