use yew::prelude::*;

use crate::models::AlertMessage;

#[derive(Properties, PartialEq)]
pub struct AlertOverlayProps {
    pub message: Option<AlertMessage>,
    pub on_close: Callback<()>,
}

/// Alerta flotante; sin mensaje no pinta nada
#[function_component(AlertOverlay)]
pub fn alert_overlay(props: &AlertOverlayProps) -> Html {
    let Some(alert) = &props.message else {
        return html! {};
    };

    html! {
        <div class={classes!("alert", alert.kind.css_class())} role="alert">
            <span class="alert-icon">{alert.kind.icon()}</span>
            <span class="alert-text">{&alert.message}</span>
            <button
                class="alert-close"
                aria-label="Cerrar"
                onclick={props.on_close.reform(|_| ())}
            >
                {"✕"}
            </button>
        </div>
    }
}
