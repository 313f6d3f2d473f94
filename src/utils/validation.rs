// ============================================================================
// VALIDATION - Reglas de los formularios de acceso
// ============================================================================
// Cada validador devuelve None si el valor es válido o el mensaje a mostrar
// ============================================================================

const PASSWORD_SPECIALS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/";

fn has_outer_spaces(value: &str) -> bool {
    value.trim() != value
}

pub fn validate_email(value: &str) -> Option<String> {
    if has_outer_spaces(value) {
        return Some("El correo no puede tener espacios al inicio ni al final.".to_string());
    }
    let allowed = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@'));
    if !allowed {
        return Some("Solo se permiten letras, dígitos y _ @ .".to_string());
    }
    if !value.contains('@') {
        return Some("El correo debe contener '@'.".to_string());
    }
    None
}

pub fn validate_username(value: &str) -> Option<String> {
    if has_outer_spaces(value) {
        return Some("El usuario no puede tener espacios al inicio ni al final.".to_string());
    }
    let len = value.chars().count();
    if !(3..=20).contains(&len) {
        return Some("El usuario debe tener entre 3 y 20 caracteres.".to_string());
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("Solo letras, dígitos y guion bajo (_).".to_string());
    }
    None
}

pub fn validate_password(value: &str) -> Option<String> {
    if has_outer_spaces(value) {
        return Some("La contraseña no puede tener espacios al inicio ni al final.".to_string());
    }
    if value.chars().count() < 8 {
        return Some("Mínimo 8 caracteres.".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Debe incluir al menos una mayúscula (A–Z).".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Debe incluir al menos una minúscula (a–z).".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Debe incluir al menos un número (0–9).".to_string());
    }
    if !value.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Some(format!(
            "Debe incluir al menos un carácter especial ({}).",
            PASSWORD_SPECIALS
        ));
    }
    None
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        return Some("Repite la contraseña.".to_string());
    }
    if password != confirm {
        return Some("Las contraseñas no coinciden.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("ana@rex.es").is_none());
        assert!(validate_email(" ana@rex.es").is_some());
        assert_eq!(
            validate_email("ana.rex.es").as_deref(),
            Some("El correo debe contener '@'.")
        );
        assert_eq!(
            validate_email("ana+1@rex.es").as_deref(),
            Some("Solo se permiten letras, dígitos y _ @ .")
        );
        assert!(validate_email("").is_some());
    }

    #[test]
    fn username_length_and_charset() {
        assert!(validate_username("ana_23").is_none());
        assert!(validate_username("an").is_some());
        assert!(validate_username(&"a".repeat(21)).is_some());
        assert_eq!(
            validate_username("ana-23").as_deref(),
            Some("Solo letras, dígitos y guion bajo (_).")
        );
    }

    #[test]
    fn password_requires_every_character_class() {
        assert!(validate_password("Secreta1!").is_none());
        assert_eq!(validate_password("Ab1!").as_deref(), Some("Mínimo 8 caracteres."));
        assert!(validate_password("secreta1!").unwrap().contains("mayúscula"));
        assert!(validate_password("SECRETA1!").unwrap().contains("minúscula"));
        assert!(validate_password("Secretaa!").unwrap().contains("número"));
        assert!(validate_password("Secreta11").unwrap().contains("especial"));
        assert!(validate_password(" Secreta1!").is_some());
    }

    #[test]
    fn confirm_must_match() {
        assert_eq!(
            validate_confirm_password("Secreta1!", "").as_deref(),
            Some("Repite la contraseña.")
        );
        assert!(validate_confirm_password("Secreta1!", "Secreta1?").is_some());
        assert!(validate_confirm_password("Secreta1!", "Secreta1!").is_none());
    }
}
