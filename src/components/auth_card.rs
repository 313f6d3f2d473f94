// ============================================================================
// AUTH CARD - Login / registro dentro de un modal
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_alert, use_session_context};
use crate::services::{classify_signup_error, perform_login, perform_signup, ApiClient, SignupErrorTarget};
use crate::viewmodels::{AuthField, AuthForm, AuthMode};

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    #[prop_or_default]
    pub mode: AuthMode,
    pub on_switch_mode: Callback<AuthMode>,
    /// Acceso correcto (la sesión ya está actualizada)
    pub on_success: Callback<()>,
}

#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    let session = use_session_context();
    let alert = use_alert();
    let form = use_state(|| AuthForm::new(props.mode));
    let submitting = use_state(|| false);

    // El modo lo decide el padre
    {
        let form = form.clone();
        use_effect_with(props.mode, move |mode| {
            if form.mode != *mode {
                let mut next = (*form).clone();
                next.switch_mode(*mode);
                form.set(next);
            }
            || ()
        });
    }

    let on_input = |field: AuthField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_value(field, input.value());
            form.set(next);
        })
    };

    let on_blur = |field: AuthField| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.touch(field);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let session = session.clone();
        let alert = alert.clone();
        let on_success = props.on_success.clone();
        let on_switch_mode = props.on_switch_mode.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let mut checked = (*form).clone();
            if !checked.validate_all() {
                form.set(checked);
                return;
            }
            form.set(checked.clone());
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let session = session.clone();
            let alert = alert.clone();
            let on_success = on_success.clone();
            let on_switch_mode = on_switch_mode.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let email = checked.value(AuthField::Email).to_string();
                let password = checked.value(AuthField::Password).to_string();

                match checked.mode {
                    AuthMode::Login => {
                        let outcome = perform_login(&api, &email, &password).await;
                        match session.state.after_login(outcome) {
                            (next, None) => {
                                session.login.emit(next);
                                on_success.emit(());
                            }
                            (_, Some(failure)) => {
                                log::error!("❌ [AUTH] Login fallido: {}", failure.message);
                                alert.present(failure);
                            }
                        }
                    }
                    AuthMode::Signup => {
                        let username = checked.value(AuthField::Username).to_string();
                        match perform_signup(&api, &email, &username, &password).await {
                            Ok(logged) => {
                                let (next, _) = session.state.after_login(Ok(logged));
                                session.login.emit(next);
                                alert.success("Cuenta creada. ¡Bienvenido a REX!");
                                on_success.emit(());
                            }
                            Err(e) => {
                                log::error!("❌ [AUTH] Registro fallido: {}", e);
                                let target = classify_signup_error(&e);
                                let created = target == SignupErrorTarget::AccountCreated;
                                checked.apply_signup_error(target);
                                form.set(checked);
                                if created {
                                    on_switch_mode.emit(AuthMode::Login);
                                }
                            }
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    let is_signup = form.mode == AuthMode::Signup;
    let field_view = |field: AuthField, label: &'static str, input_type: &'static str| {
        let error = form.visible_error(field).map(str::to_string);
        html! {
            <div class={classes!("form-group", error.as_ref().map(|_| "form-group--error"))}>
                <label>{label}</label>
                <input
                    type={input_type}
                    value={form.value(field).to_string()}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
                if let Some(error) = error {
                    <p class="field-error">{error}</p>
                }
            </div>
        }
    };

    let submit_label = match (*submitting, form.mode) {
        (true, _) => "…",
        (false, AuthMode::Login) => "Iniciar sesión",
        (false, AuthMode::Signup) => "Crear cuenta",
    };

    html! {
        <div class="auth">
            <div class="auth__avatar" aria-hidden="true">{"👤"}</div>
            <h1 class="auth__title">
                {if is_signup { "Crear cuenta" } else { "Bienvenido de nuevo" }}
            </h1>
            <p class="auth__subtitle">
                {if is_signup { "Únete en unos segundos" } else { "Inicia sesión para continuar" }}
            </p>

            <form class="auth__form" onsubmit={on_submit} novalidate=true>
                if is_signup {
                    {field_view(AuthField::Username, "Usuario", "text")}
                }
                {field_view(AuthField::Email, "Email", "email")}
                {field_view(AuthField::Password, "Contraseña", "password")}
                if is_signup {
                    {field_view(AuthField::Confirm, "Repite la contraseña", "password")}
                }

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled={*submitting || form.has_errors()}
                >
                    {submit_label}
                </button>

                if let Some(error) = form.form_error.clone() {
                    <p class="auth__form-error" role="alert">{error}</p>
                }
            </form>

            <div class="auth__switch">
                if is_signup {
                    {"¿Ya tienes cuenta? "}
                    <button class="auth__link" onclick={props.on_switch_mode.reform(|_| AuthMode::Login)}>
                        {"Inicia sesión"}
                    </button>
                } else {
                    {"¿No tienes cuenta? "}
                    <button class="auth__link" onclick={props.on_switch_mode.reform(|_| AuthMode::Signup)}>
                        {"Regístrate"}
                    </button>
                }
            </div>
        </div>
    }
}
