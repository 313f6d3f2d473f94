// ============================================================================
// AUTH FORM VIEWMODEL - Campos, errores y "touched" del login / registro
// ============================================================================

use crate::services::SignupErrorTarget;
use crate::utils::{validate_confirm_password, validate_email, validate_password, validate_username};

const ACCOUNT_CREATED_MESSAGE: &str = "Cuenta creada, inicia sesión.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Username,
    Password,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct FieldState {
    value: String,
    error: Option<String>,
    touched: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    email: FieldState,
    username: FieldState,
    password: FieldState,
    confirm: FieldState,
    /// Banner general (errores que no son de un campo)
    pub form_error: Option<String>,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    fn field(&self, field: AuthField) -> &FieldState {
        match field {
            AuthField::Email => &self.email,
            AuthField::Username => &self.username,
            AuthField::Password => &self.password,
            AuthField::Confirm => &self.confirm,
        }
    }

    fn field_mut(&mut self, field: AuthField) -> &mut FieldState {
        match field {
            AuthField::Email => &mut self.email,
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
            AuthField::Confirm => &mut self.confirm,
        }
    }

    fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Signup => &[
                AuthField::Username,
                AuthField::Email,
                AuthField::Password,
                AuthField::Confirm,
            ],
        }
    }

    fn check(&self, field: AuthField, value: &str) -> Option<String> {
        match field {
            AuthField::Email => validate_email(value),
            AuthField::Username => validate_username(value),
            AuthField::Password => validate_password(value),
            AuthField::Confirm => validate_confirm_password(&self.password.value, value),
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        &self.field(field).value
    }

    /// Error a mostrar: solo si el campo se ha tocado
    pub fn visible_error(&self, field: AuthField) -> Option<&str> {
        let state = self.field(field);
        if state.touched {
            state.error.as_deref()
        } else {
            None
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields().iter().any(|f| self.field(*f).error.is_some())
    }

    /// Cambia un valor y lo revalida. En registro, cambiar la contraseña
    /// revalida también la confirmación si ya tiene algo escrito.
    pub fn set_value(&mut self, field: AuthField, value: String) {
        let error = self.check(field, &value);
        let state = self.field_mut(field);
        state.value = value;
        state.error = error;

        if field == AuthField::Password && self.mode == AuthMode::Signup && !self.confirm.value.is_empty() {
            self.confirm.error = validate_confirm_password(&self.password.value, &self.confirm.value);
        }
    }

    pub fn touch(&mut self, field: AuthField) {
        self.field_mut(field).touched = true;
    }

    /// Valida todos los campos del modo actual antes de enviar.
    /// Con errores marca todo como tocado y devuelve false.
    pub fn validate_all(&mut self) -> bool {
        self.form_error = None;
        let mut ok = true;
        for field in self.fields() {
            let error = self.check(*field, &self.field(*field).value);
            ok &= error.is_none();
            self.field_mut(*field).error = error;
        }
        if !ok {
            for field in self.fields() {
                self.touch(*field);
            }
        }
        ok
    }

    /// Coloca un error de registro en su campo o en el banner
    pub fn apply_signup_error(&mut self, target: SignupErrorTarget) {
        match target {
            SignupErrorTarget::Email(message) => {
                self.email.error = Some(message);
                self.email.touched = true;
            }
            SignupErrorTarget::Username(message) => {
                self.username.error = Some(message);
                self.username.touched = true;
            }
            SignupErrorTarget::Form(message) => {
                self.form_error = Some(if message.is_empty() {
                    "No se pudo completar el registro.".to_string()
                } else {
                    message
                });
            }
            SignupErrorTarget::AccountCreated => {
                self.switch_mode(AuthMode::Login);
                self.form_error = Some(ACCOUNT_CREATED_MESSAGE.to_string());
            }
        }
    }

    /// Cambia de modo conservando email y contraseña
    pub fn switch_mode(&mut self, mode: AuthMode) {
        let email = self.email.value.clone();
        let password = self.password.value.clone();
        *self = Self::new(mode);
        self.set_value(AuthField::Email, email);
        self.set_value(AuthField::Password, password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_PASSWORD: &str = "Secreta1!";

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.set_value(AuthField::Email, "sin-arroba".to_string());
        assert!(form.has_errors());
        assert_eq!(form.visible_error(AuthField::Email), None);

        form.touch(AuthField::Email);
        assert!(form.visible_error(AuthField::Email).is_some());
    }

    #[test]
    fn submit_attempt_touches_every_field() {
        let mut form = AuthForm::new(AuthMode::Signup);
        assert!(!form.validate_all());
        for field in [AuthField::Username, AuthField::Email, AuthField::Password, AuthField::Confirm] {
            assert!(form.visible_error(field).is_some(), "{:?}", field);
        }
    }

    #[test]
    fn login_ignores_signup_only_fields() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.set_value(AuthField::Email, "ana@rex.app".to_string());
        form.set_value(AuthField::Password, GOOD_PASSWORD.to_string());
        assert!(form.validate_all());
        assert!(!form.has_errors());
    }

    #[test]
    fn changing_password_revalidates_confirm() {
        let mut form = AuthForm::new(AuthMode::Signup);
        form.set_value(AuthField::Password, GOOD_PASSWORD.to_string());
        form.set_value(AuthField::Confirm, GOOD_PASSWORD.to_string());
        form.touch(AuthField::Confirm);
        assert_eq!(form.visible_error(AuthField::Confirm), None);

        form.set_value(AuthField::Password, "Otra1234!".to_string());
        assert_eq!(
            form.visible_error(AuthField::Confirm),
            Some("Las contraseñas no coinciden.")
        );
    }

    #[test]
    fn signup_conflicts_land_on_fields() {
        let mut form = AuthForm::new(AuthMode::Signup);
        form.apply_signup_error(SignupErrorTarget::Email("El email ya existe".to_string()));
        assert_eq!(form.visible_error(AuthField::Email), Some("El email ya existe"));

        form.apply_signup_error(SignupErrorTarget::Form(String::new()));
        assert_eq!(form.form_error.as_deref(), Some("No se pudo completar el registro."));

        // Un nuevo intento limpia el banner
        form.validate_all();
        assert_eq!(form.form_error, None);
    }

    #[test]
    fn switching_mode_keeps_credentials() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.set_value(AuthField::Email, "ana@rex.app".to_string());
        form.form_error = Some("x".to_string());
        form.switch_mode(AuthMode::Signup);
        assert_eq!(form.mode, AuthMode::Signup);
        assert_eq!(form.value(AuthField::Email), "ana@rex.app");
        assert_eq!(form.form_error, None);
    }

    #[test]
    fn created_account_without_session_switches_to_login() {
        let mut form = AuthForm::new(AuthMode::Signup);
        form.set_value(AuthField::Email, "ana@rex.app".to_string());
        form.set_value(AuthField::Password, GOOD_PASSWORD.to_string());

        form.apply_signup_error(SignupErrorTarget::AccountCreated);
        assert_eq!(form.mode, AuthMode::Login);
        assert_eq!(form.value(AuthField::Email), "ana@rex.app");
        assert_eq!(form.value(AuthField::Password), GOOD_PASSWORD);
        assert_eq!(form.form_error.as_deref(), Some("Cuenta creada, inicia sesión."));
    }
}
