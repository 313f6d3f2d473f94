// ============================================================================
// USE ALERT - Superficie única de alertas (la última gana)
// ============================================================================
// El temporizador de auto-ocultado vive en un use_mut_ref: al sustituirlo,
// el Timeout anterior se suelta y queda cancelado. Además cada alerta lleva
// su generación, así que un vencimiento tardío no borra la siguiente.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::AlertOverlay;
use crate::models::{AlertInput, AlertKind, AlertMessage};
use crate::utils::{Generation, ALERT_AUTO_HIDE_MS};
use crate::viewmodels::{AlertAction, AlertSurface};

impl Reducible for AlertSurface {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct UseAlertHandle {
    pub current: Option<AlertMessage>,
    pub show: Callback<(AlertInput, AlertKind)>,
    pub hide: Callback<()>,
}

impl PartialEq for UseAlertHandle {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl UseAlertHandle {
    /// Fuera de un provider: las alertas solo llegan a la consola
    fn detached() -> Self {
        Self {
            current: None,
            show: Callback::from(|(input, kind): (AlertInput, AlertKind)| {
                log::warn!("⚠️ [ALERT] Sin provider ({:?}): {}", kind, input.into_message());
            }),
            hide: Callback::from(|_| ()),
        }
    }

    pub fn error(&self, input: impl Into<AlertInput>) {
        self.show.emit((input.into(), AlertKind::Error));
    }

    pub fn warning(&self, input: impl Into<AlertInput>) {
        self.show.emit((input.into(), AlertKind::Warning));
    }

    pub fn success(&self, input: impl Into<AlertInput>) {
        self.show.emit((input.into(), AlertKind::Success));
    }

    /// Muestra una alerta ya normalizada
    pub fn present(&self, alert: AlertMessage) {
        self.show.emit((AlertInput::Text(alert.message), alert.kind));
    }
}

#[hook]
fn use_alert_state() -> UseAlertHandle {
    let surface = use_reducer(AlertSurface::default);
    let generation = use_memo((), |_| Generation::default());
    let timer = use_mut_ref(|| None::<Timeout>);

    let hide = {
        let surface = surface.dispatcher();
        let timer = timer.clone();
        Callback::from(move |_| {
            timer.borrow_mut().take();
            surface.dispatch(AlertAction::Hide);
        })
    };

    let show = {
        let surface = surface.dispatcher();
        let generation = (*generation).clone();
        let timer = timer.clone();
        Callback::from(move |(input, kind): (AlertInput, AlertKind)| {
            let message = input.into_message();
            match kind {
                AlertKind::Error => log::error!("❌ [ALERT] {}", message),
                AlertKind::Warning => log::warn!("⚠️ [ALERT] {}", message),
                AlertKind::Success => log::info!("✅ [ALERT] {}", message),
            }
            let ticket = generation.advance();
            surface.dispatch(AlertAction::Show {
                message: AlertMessage { message, kind },
                generation: ticket,
            });

            let expire = {
                let surface = surface.clone();
                Timeout::new(ALERT_AUTO_HIDE_MS, move || surface.dispatch(AlertAction::Expire(ticket)))
            };
            // Sustituir cancela el anterior (Drop de Timeout)
            *timer.borrow_mut() = Some(expire);
        })
    };

    // Soltar el temporizador al desmontar el provider
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    UseAlertHandle {
        current: surface.current.clone(),
        show,
        hide,
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertContextProviderProps {
    pub children: Children,
}

/// Provider de alertas; pinta la superficie flotante encima de los hijos
#[function_component(AlertContextProvider)]
pub fn alert_context_provider(props: &AlertContextProviderProps) -> Html {
    let alert = use_alert_state();
    let message = alert.current.clone();
    let on_close = alert.hide.clone();

    html! {
        <ContextProvider<UseAlertHandle> context={alert}>
            {props.children.clone()}
            <AlertOverlay {message} {on_close} />
        </ContextProvider<UseAlertHandle>>
    }
}

/// Alertas del provider más cercano
#[hook]
pub fn use_alert() -> UseAlertHandle {
    use_context::<UseAlertHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ [ALERT] use_alert() fuera de AlertContextProvider");
        UseAlertHandle::detached()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_alerts_never_become_visible() {
        let handle = UseAlertHandle::detached();
        handle.error("Sin provider");
        handle.present(AlertMessage {
            message: "Ruta guardada".to_string(),
            kind: AlertKind::Success,
        });
        handle.hide.emit(());
        assert_eq!(handle.current, None);
    }
}
